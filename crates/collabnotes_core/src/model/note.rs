//! Note record and category model.
//!
//! # Responsibility
//! - Define `NoteRecord`, the single annotation entity of this crate.
//! - Keep the serialized field layout identical to the host document format.
//!
//! # Invariants
//! - `object_id` is assigned once at note creation and never reassigned.
//! - `object_reference` caches the referenced object's display name and is
//!   only rewritten by a resolver pass.
//! - Title and description are non-empty for every record committed through
//!   the document facade; `validate()` is the single authority for that rule.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for a referenced scene object.
///
/// The host namespace keys objects by a mutable display name; this id is the
/// immutable handle that lets reference repair survive renames.
pub type ObjectId = Uuid;

/// Fixed priority category stored on a note.
///
/// Serialized variant names match the host's enum strings, including the
/// space in `"No Category"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Category {
    /// Category of high importance.
    High,
    /// Medium importance category.
    Medium,
    /// Category of low importance.
    Low,
    /// Note without category.
    #[default]
    #[serde(rename = "No Category")]
    NoCategory,
}

impl Category {
    /// All storable categories in display order.
    pub const ALL_VALUES: [Category; 4] = [
        Category::High,
        Category::Medium,
        Category::Low,
        Category::NoCategory,
    ];

    /// Short label shown by selector widgets.
    pub fn label(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
            Self::NoCategory => "No Category",
        }
    }

    /// Longer tooltip-style description for selector widgets.
    pub fn description(self) -> &'static str {
        match self {
            Self::High => "Category of high importance",
            Self::Medium => "Medium importance category",
            Self::Low => "Category of low importance",
            Self::NoCategory => "Note without category",
        }
    }
}

impl Display for Category {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Filter-side category selector: the storable categories plus `All`.
///
/// `All` never appears on a stored record; it only widens the filtered view
/// to the full store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CategoryFilter {
    High,
    Medium,
    Low,
    #[serde(rename = "No Category")]
    NoCategory,
    #[default]
    All,
}

impl CategoryFilter {
    /// All selectable filter values in display order, `All` last.
    pub const ALL_VALUES: [CategoryFilter; 5] = [
        CategoryFilter::High,
        CategoryFilter::Medium,
        CategoryFilter::Low,
        CategoryFilter::NoCategory,
        CategoryFilter::All,
    ];

    /// Returns whether a record with `category` passes this filter.
    pub fn matches(self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::High => category == Category::High,
            Self::Medium => category == Category::Medium,
            Self::Low => category == Category::Low,
            Self::NoCategory => category == Category::NoCategory,
        }
    }
}

impl From<Category> for CategoryFilter {
    fn from(value: Category) -> Self {
        match value {
            Category::High => Self::High,
            Category::Medium => Self::Medium,
            Category::Low => Self::Low,
            Category::NoCategory => Self::NoCategory,
        }
    }
}

/// Validation error for note text fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteValidationError {
    /// Title is empty after trimming.
    EmptyTitle,
    /// Description is empty after trimming.
    EmptyDescription,
}

impl Display for NoteValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
            Self::EmptyDescription => write!(f, "note description must not be empty"),
        }
    }
}

impl Error for NoteValidationError {}

/// One annotation attached to one referenced scene object.
///
/// Serialized field names follow the host document layout
/// (`note_title`, `note_description`, `is_edit_mode`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NoteRecord {
    /// Stable id of the referenced object, assigned at creation.
    pub object_id: ObjectId,
    /// Cached display name of the referenced object. May go stale when the
    /// object is deleted in the host; a resolver pass repairs renames.
    pub object_reference: String,
    /// Display title, non-empty once committed.
    #[serde(rename = "note_title")]
    pub title: String,
    /// Free-text body, non-empty once committed.
    #[serde(rename = "note_description")]
    pub description: String,
    /// Priority category.
    pub category: Category,
    /// Transient inline-edit presentation flag.
    #[serde(rename = "is_edit_mode", default)]
    pub edit_flag: bool,
}

impl NoteRecord {
    /// Creates a record with `edit_flag` cleared.
    pub fn new(
        object_id: ObjectId,
        object_reference: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            object_id,
            object_reference: object_reference.into(),
            title: title.into(),
            description: description.into(),
            category,
            edit_flag: false,
        }
    }

    /// Checks the non-empty title/description rule enforced on commit paths.
    pub fn validate(&self) -> Result<(), NoteValidationError> {
        validate_text(self.title.as_str(), self.description.as_str())
    }
}

/// Shared non-empty check used by record validation and staged-commit guards.
pub fn validate_text(title: &str, description: &str) -> Result<(), NoteValidationError> {
    if title.trim().is_empty() {
        return Err(NoteValidationError::EmptyTitle);
    }
    if description.trim().is_empty() {
        return Err(NoteValidationError::EmptyDescription);
    }
    Ok(())
}
