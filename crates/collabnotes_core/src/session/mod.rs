//! Transient form-state staging for note creation and inline edits.
//!
//! # Responsibility
//! - Hold staged field values between user keystrokes and a commit.
//! - Track whether the session is creating a new note or editing one.
//!
//! # Invariants
//! - `target_index` is `Some` exactly while an inline edit is in progress.
//! - Staged title/description are cleared after every successful commit;
//!   staged category and object-reference survive (host-observed behavior).

pub mod edit_session;
