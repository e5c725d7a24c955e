//! Edit session state machine.
//!
//! Two states: Idle (no target index, staging a new note) and Editing
//! (target index set, staging changes to an existing record). Commit
//! orchestration lives on `NoteDocument`; this type owns only the staged
//! buffer and the target index.

use crate::model::note::{validate_text, Category};

/// Staged form state for the create panel and inline edits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    title: String,
    description: String,
    category: Category,
    object_reference: String,
    target_index: Option<usize>,
}

impl EditSession {
    /// Creates an Idle session with empty staged fields.
    pub fn new() -> Self {
        Self::default()
    }

    /// Staged title text.
    pub fn staged_title(&self) -> &str {
        &self.title
    }

    /// Staged description text.
    pub fn staged_description(&self) -> &str {
        &self.description
    }

    /// Staged category for the next created note.
    pub fn staged_category(&self) -> Category {
        self.category
    }

    /// Staged object-reference text backing the selector search field.
    pub fn staged_object_reference(&self) -> &str {
        &self.object_reference
    }

    /// Index of the record being edited, if any.
    pub fn target_index(&self) -> Option<usize> {
        self.target_index
    }

    /// Returns whether an inline edit is in progress.
    pub fn is_editing(&self) -> bool {
        self.target_index.is_some()
    }

    pub fn stage_title(&mut self, value: impl Into<String>) {
        self.title = value.into();
    }

    pub fn stage_description(&mut self, value: impl Into<String>) {
        self.description = value.into();
    }

    pub fn stage_category(&mut self, value: Category) {
        self.category = value;
    }

    pub fn stage_object_reference(&mut self, value: impl Into<String>) {
        self.object_reference = value.into();
    }

    /// Returns whether the staged title and description pass commit
    /// validation. Presentation layers use this to disable the commit
    /// action instead of surfacing an error.
    pub fn can_commit(&self) -> bool {
        validate_text(&self.title, &self.description).is_ok()
    }

    /// Enters Editing state targeting `index`, seeding the buffer with the
    /// record's current title and description.
    pub(crate) fn begin(
        &mut self,
        index: usize,
        current_title: impl Into<String>,
        current_description: impl Into<String>,
    ) {
        self.title = current_title.into();
        self.description = current_description.into();
        self.target_index = Some(index);
    }

    /// Clears staged title/description only. Category and object-reference
    /// intentionally keep their values so repeat-adds to the same object
    /// and category need no re-staging.
    pub(crate) fn clear_staged_text(&mut self) {
        self.title.clear();
        self.description.clear();
    }

    /// Returns to Idle, clearing staged text.
    pub(crate) fn end(&mut self) {
        self.clear_staged_text();
        self.target_index = None;
    }

    /// Keeps the edit target aligned with store indices after a removal.
    ///
    /// Removing the target itself ends the session; removing a lower index
    /// shifts the target down by one.
    pub(crate) fn note_removed(&mut self, removed_index: usize) {
        match self.target_index {
            Some(target) if target == removed_index => self.end(),
            Some(target) if target > removed_index => {
                self.target_index = Some(target - 1);
            }
            _ => {}
        }
    }
}
