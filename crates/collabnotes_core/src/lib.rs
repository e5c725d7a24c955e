//! Core note-annotation logic for CollabNotes.
//! This crate is the single source of truth for the note lifecycle; the
//! presentation host renders state and dispatches actions, nothing more.

pub mod document;
pub mod logging;
pub mod model;
pub mod namespace;
pub mod resolver;
pub mod session;
pub mod store;

pub use document::{CreateOutcome, EditOutcome, NoteDocument, SessionError};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::note::{
    Category, CategoryFilter, NoteRecord, NoteValidationError, ObjectId,
};
pub use namespace::{MemoryNamespace, ObjectNamespace};
pub use resolver::{resolve_references, ResolvePass};
pub use session::edit_session::EditSession;
pub use store::note_store::{NoteStore, StoreError, StoreResult};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::core_version;

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
