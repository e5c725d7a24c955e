//! Ordered note collection with positional access and filtered views.
//!
//! # Responsibility
//! - Own the note records of one document in insertion order.
//! - Serve lazy category-filtered views that preserve original indices.
//!
//! # Invariants
//! - `add` appends; indices of existing records never change on add.
//! - `remove` shifts subsequent records down by one; callers holding an
//!   index across a removal must re-derive it.
//! - A filtered view borrows the store and restarts from the front each
//!   time it is requested.

use crate::model::note::{CategoryFilter, NoteRecord};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type StoreResult<T> = Result<T, StoreError>;

/// Positional access error for the note store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreError {
    /// Index is outside the store's current bounds.
    IndexOutOfRange { index: usize, len: usize },
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "note index {index} out of range for store of {len} records")
            }
        }
    }
}

impl Error for StoreError {}

/// Ordered collection of note records for one document.
///
/// Serializes transparently as the record sequence, matching the host
/// document's collection property.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NoteStore {
    records: Vec<NoteRecord>,
}

impl NoteStore {
    /// Creates an empty store for a fresh document/scene.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records currently held.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns whether the store holds no records.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record and returns its new index. Always succeeds.
    pub fn add(&mut self, record: NoteRecord) -> usize {
        self.records.push(record);
        self.records.len() - 1
    }

    /// Returns the record at `index`.
    pub fn get(&self, index: usize) -> StoreResult<&NoteRecord> {
        self.records
            .get(index)
            .ok_or(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Returns a mutable reference to the record at `index`.
    pub fn get_mut(&mut self, index: usize) -> StoreResult<&mut NoteRecord> {
        let len = self.records.len();
        self.records
            .get_mut(index)
            .ok_or(StoreError::IndexOutOfRange { index, len })
    }

    /// Removes and returns the record at `index`.
    ///
    /// Records after `index` shift down by one position.
    pub fn remove(&mut self, index: usize) -> StoreResult<NoteRecord> {
        if index >= self.records.len() {
            return Err(StoreError::IndexOutOfRange {
                index,
                len: self.records.len(),
            });
        }
        Ok(self.records.remove(index))
    }

    /// Iterates all records in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &NoteRecord> {
        self.records.iter()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut NoteRecord> {
        self.records.iter_mut()
    }

    /// Lazy view of `(original_index, record)` pairs passing `filter`.
    ///
    /// Preserves insertion order; `CategoryFilter::All` yields the full
    /// sequence. Restartable and finite.
    pub fn filtered_view(
        &self,
        filter: CategoryFilter,
    ) -> impl Iterator<Item = (usize, &NoteRecord)> {
        self.records
            .iter()
            .enumerate()
            .filter(move |(_, record)| filter.matches(record.category))
    }
}

#[cfg(test)]
mod tests {
    use super::{NoteStore, StoreError};
    use crate::model::note::{Category, CategoryFilter, NoteRecord};
    use uuid::Uuid;

    fn record(title: &str, category: Category) -> NoteRecord {
        NoteRecord::new(Uuid::new_v4(), "Cube", title, "body", category)
    }

    #[test]
    fn add_returns_consecutive_indices() {
        let mut store = NoteStore::new();
        assert_eq!(store.add(record("a", Category::High)), 0);
        assert_eq!(store.add(record("b", Category::Low)), 1);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn remove_on_empty_store_is_out_of_range() {
        let mut store = NoteStore::new();
        assert_eq!(
            store.remove(0),
            Err(StoreError::IndexOutOfRange { index: 0, len: 0 })
        );
    }

    #[test]
    fn filtered_view_is_restartable() {
        let mut store = NoteStore::new();
        store.add(record("a", Category::High));
        store.add(record("b", Category::Low));

        let first = store.filtered_view(CategoryFilter::High).count();
        let second = store.filtered_view(CategoryFilter::High).count();
        assert_eq!(first, 1);
        assert_eq!(second, 1);
    }
}
