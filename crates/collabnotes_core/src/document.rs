//! Per-document annotation context and its user-action entry points.
//!
//! # Responsibility
//! - Own one document's note store, edit session and category filter.
//! - Expose the three user actions (create, toggle-or-commit edit, delete)
//!   and the host's document-update hook as explicit methods.
//!
//! # Invariants
//! - Every mutation is a single synchronous step; no partial commits.
//! - The commit paths never store a record with empty title/description.
//! - Create commits are Idle-only; edit commits are Editing-only.

use crate::model::note::{
    validate_text, Category, CategoryFilter, NoteRecord, NoteValidationError, ObjectId,
};
use crate::namespace::ObjectNamespace;
use crate::resolver::{resolve_references, ResolvePass};
use crate::session::edit_session::EditSession;
use crate::store::note_store::{NoteStore, StoreError};
use log::{debug, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Result of a create commit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A record was appended at this index.
    Added(usize),
    /// No object was selected; the store is untouched but staged text was
    /// reset, matching the host's observed commit behavior.
    NoSelection,
}

/// Result of a toggle-or-commit action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The record entered edit mode and its text was staged.
    BeganEdit,
    /// Staged text differed and was written back to the record.
    Changed,
    /// Staged text matched the record; nothing was written. Pure
    /// notification, not an error.
    NoChanges,
}

/// Errors surfaced by the document entry points.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// Positional access with a stale or invalid index.
    Store(StoreError),
    /// Commit attempted with empty staged title or description. The
    /// presentation layer normally prevents this by disabling the action.
    Validation(NoteValidationError),
    /// Create commit attempted while an inline edit is in progress.
    EditInProgress,
    /// In-place field edit attempted on a record whose edit flag is clear.
    NotInEditMode,
    /// Object-reference retarget to a name with no live object behind it.
    UnknownObject(String),
}

impl Display for SessionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Store(err) => write!(f, "{err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::EditInProgress => {
                write!(f, "cannot create a note while an inline edit is in progress")
            }
            Self::NotInEditMode => {
                write!(f, "record must be in edit mode for in-place field edits")
            }
            Self::UnknownObject(name) => write!(f, "no live object is named `{name}`"),
        }
    }
}

impl Error for SessionError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Store(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::EditInProgress | Self::NotInEditMode | Self::UnknownObject(_) => None,
        }
    }
}

impl From<StoreError> for SessionError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

impl From<NoteValidationError> for SessionError {
    fn from(value: NoteValidationError) -> Self {
        Self::Validation(value)
    }
}

/// One document's annotation state: store, session and filter.
///
/// Replaces the host's ambient per-scene globals with an explicit context
/// object the presentation layer passes around.
#[derive(Debug, Clone, Default)]
pub struct NoteDocument {
    store: NoteStore,
    session: EditSession,
    filter: CategoryFilter,
}

impl NoteDocument {
    /// Creates an empty document context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a store deserialized from the host document format in a fresh
    /// context with an Idle session and the default filter.
    pub fn with_store(store: NoteStore) -> Self {
        Self {
            store,
            session: EditSession::new(),
            filter: CategoryFilter::default(),
        }
    }

    /// Read access to the note store.
    pub fn store(&self) -> &NoteStore {
        &self.store
    }

    /// Read access to the staged form state.
    pub fn session(&self) -> &EditSession {
        &self.session
    }

    /// Mutable access for staging form fields.
    pub fn session_mut(&mut self) -> &mut EditSession {
        &mut self.session
    }

    /// Currently selected category filter.
    pub fn filter(&self) -> CategoryFilter {
        self.filter
    }

    /// Selects the category filter used by `filtered_view`.
    pub fn set_filter(&mut self, filter: CategoryFilter) {
        self.filter = filter;
    }

    /// Lazy `(original_index, record)` view under the current filter.
    pub fn filtered_view(&self) -> impl Iterator<Item = (usize, &NoteRecord)> {
        self.store.filtered_view(self.filter)
    }

    /// Commits the staged fields as a new note on the selected object.
    ///
    /// `selected` is the host's active object at the moment of the action.
    /// Without a live selection the commit is a silent no-op on the store,
    /// but staged title/description are still reset. Staged category and
    /// object-reference survive either way, so repeat-adds keep their
    /// setup.
    pub fn create_note(
        &mut self,
        selected: Option<ObjectId>,
        ns: &impl ObjectNamespace,
    ) -> Result<CreateOutcome, SessionError> {
        if self.session.is_editing() {
            return Err(SessionError::EditInProgress);
        }
        validate_text(
            self.session.staged_title(),
            self.session.staged_description(),
        )?;

        let target = selected.and_then(|id| ns.display_name(id).map(|name| (id, name)));
        let Some((object_id, object_name)) = target else {
            self.session.clear_staged_text();
            debug!("event=note_create_skipped module=document status=ok reason=no_selection");
            return Ok(CreateOutcome::NoSelection);
        };

        let record = NoteRecord::new(
            object_id,
            object_name,
            self.session.staged_title(),
            self.session.staged_description(),
            self.session.staged_category(),
        );
        let index = self.store.add(record);
        self.session.clear_staged_text();
        info!(
            "event=note_created module=document status=ok index={index} total={}",
            self.store.len()
        );
        Ok(CreateOutcome::Added(index))
    }

    /// Toggles a record into edit mode, or commits the staged edit when the
    /// record is already in edit mode.
    ///
    /// Commit semantics: staged title/description are written back only when
    /// they differ from the record's current values; the edit flag is
    /// cleared and the session returns to Idle either way. A record whose
    /// persisted edit flag is set without a live session (stale document
    /// state) is toggled back without mutation.
    pub fn toggle_or_commit_edit(&mut self, index: usize) -> Result<EditOutcome, SessionError> {
        let in_edit = self.store.get(index)?.edit_flag;

        if !in_edit {
            let record = self.store.get_mut(index)?;
            record.edit_flag = true;
            let (title, description) = (record.title.clone(), record.description.clone());
            self.session.begin(index, title, description);
            debug!("event=note_edit_begun module=document status=ok index={index}");
            return Ok(EditOutcome::BeganEdit);
        }

        if self.session.target_index() != Some(index) {
            // Stale edit flag with no backing session: plain toggle-off.
            self.store.get_mut(index)?.edit_flag = false;
            return Ok(EditOutcome::NoChanges);
        }

        validate_text(
            self.session.staged_title(),
            self.session.staged_description(),
        )?;

        let staged_title = self.session.staged_title().to_string();
        let staged_description = self.session.staged_description().to_string();
        let record = self.store.get_mut(index)?;
        let changed =
            staged_title != record.title || staged_description != record.description;
        if changed {
            record.title = staged_title;
            record.description = staged_description;
        }
        record.edit_flag = false;
        self.session.end();
        info!(
            "event=note_edit_committed module=document status=ok index={index} changed={changed}"
        );
        Ok(if changed {
            EditOutcome::Changed
        } else {
            EditOutcome::NoChanges
        })
    }

    /// Changes a record's category in place while it is in edit mode.
    ///
    /// Unlike title/description, category is not staged: the edit panel
    /// writes it straight onto the store record, so the change survives a
    /// later "no changes" commit.
    pub fn set_category(&mut self, index: usize, category: Category) -> Result<(), SessionError> {
        let record = self.store.get_mut(index)?;
        if !record.edit_flag {
            return Err(SessionError::NotInEditMode);
        }
        record.category = category;
        debug!("event=note_category_set module=document status=ok index={index}");
        Ok(())
    }

    /// Retargets a record's object reference in place while it is in edit
    /// mode.
    ///
    /// `name` must be the current display name of a live object, matching
    /// the selector search field which only offers existing objects. The
    /// stable id is re-derived so later resolver passes follow the new
    /// object, not the old one.
    pub fn set_object_reference(
        &mut self,
        index: usize,
        name: &str,
        ns: &impl ObjectNamespace,
    ) -> Result<(), SessionError> {
        if !self.store.get(index)?.edit_flag {
            return Err(SessionError::NotInEditMode);
        }
        let Some(object_id) = ns.lookup(name) else {
            return Err(SessionError::UnknownObject(name.to_string()));
        };

        let record = self.store.get_mut(index)?;
        record.object_id = object_id;
        record.object_reference = name.to_string();
        debug!("event=note_reference_set module=document status=ok index={index}");
        Ok(())
    }

    /// Deletes the record at `index` and returns it.
    ///
    /// Ends the session when the deleted record was the edit target, and
    /// keeps the target aligned when a lower index is removed.
    pub fn delete_note(&mut self, index: usize) -> Result<NoteRecord, SessionError> {
        let removed = self.store.remove(index)?;
        self.session.note_removed(index);
        info!(
            "event=note_deleted module=document status=ok index={index} total={}",
            self.store.len()
        );
        Ok(removed)
    }

    /// Host hook for document-graph updates: runs one reference-repair pass.
    pub fn on_document_updated(&mut self, ns: &impl ObjectNamespace) -> ResolvePass {
        let pass = resolve_references(&mut self.store, ns);
        info!(
            "event=resolver_pass module=document status=ok repaired={} unchanged={} dangling={}",
            pass.repaired, pass.unchanged, pass.dangling
        );
        pass
    }
}
