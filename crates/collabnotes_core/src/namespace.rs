//! External object-namespace abstraction.
//!
//! # Responsibility
//! - Define the host-side queries the core needs: current display name by
//!   stable id, reverse lookup by name, and selector search.
//! - Ship an in-memory implementation for tests and the CLI probe.
//!
//! # Invariants
//! - A stable id, once issued, is never reassigned to another object.
//! - Display names are unique within one namespace at any point in time.

use crate::model::note::ObjectId;
use std::collections::BTreeMap;
use uuid::Uuid;

/// Queries the core issues against the host's mutable object namespace.
///
/// The host keys objects by display name in its own UI; this trait exposes
/// the stable-id view reference repair depends on.
pub trait ObjectNamespace {
    /// Current display name of the object, or `None` if it was deleted.
    fn display_name(&self, id: ObjectId) -> Option<String>;

    /// Stable id of the object currently named `name`.
    fn lookup(&self, name: &str) -> Option<ObjectId>;

    /// Case-insensitive substring search over current display names,
    /// sorted by name. Backs the object selector field.
    fn search(&self, fragment: &str) -> Vec<(ObjectId, String)>;
}

/// BTreeMap-backed namespace for tests and standalone runs.
///
/// Hosts embedding the core supply their own `ObjectNamespace` over the
/// real scene graph.
#[derive(Debug, Clone, Default)]
pub struct MemoryNamespace {
    objects: BTreeMap<ObjectId, String>,
}

impl MemoryNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an object and returns its freshly issued stable id.
    pub fn insert(&mut self, name: impl Into<String>) -> ObjectId {
        let id = Uuid::new_v4();
        self.objects.insert(id, name.into());
        id
    }

    /// Renames an object in place. Returns false if the id is unknown.
    pub fn rename(&mut self, id: ObjectId, new_name: impl Into<String>) -> bool {
        match self.objects.get_mut(&id) {
            Some(name) => {
                *name = new_name.into();
                true
            }
            None => false,
        }
    }

    /// Deletes an object. Returns false if the id is unknown.
    pub fn remove(&mut self, id: ObjectId) -> bool {
        self.objects.remove(&id).is_some()
    }

    /// Number of live objects.
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns whether the namespace holds no objects.
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}

impl ObjectNamespace for MemoryNamespace {
    fn display_name(&self, id: ObjectId) -> Option<String> {
        self.objects.get(&id).cloned()
    }

    fn lookup(&self, name: &str) -> Option<ObjectId> {
        self.objects
            .iter()
            .find(|(_, current)| current.as_str() == name)
            .map(|(id, _)| *id)
    }

    fn search(&self, fragment: &str) -> Vec<(ObjectId, String)> {
        let needle = fragment.to_lowercase();
        let mut hits: Vec<(ObjectId, String)> = self
            .objects
            .iter()
            .filter(|(_, name)| name.to_lowercase().contains(needle.as_str()))
            .map(|(id, name)| (*id, name.clone()))
            .collect();
        hits.sort_by(|a, b| a.1.cmp(&b.1));
        hits
    }
}
