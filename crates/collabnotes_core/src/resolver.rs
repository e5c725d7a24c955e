//! Reference repair against the host object namespace.
//!
//! # Responsibility
//! - Re-derive each note's cached display name from its stable object id.
//! - Report per-pass statistics for diagnostics.
//!
//! # Invariants
//! - A pass never adds or removes records.
//! - Notes whose referenced object no longer exists keep their last-known
//!   display name (dangling reference, repaired by no one).
//!
//! The host's original repair handler looked objects up by their current
//! display name, which can never observe a rename. Keying repair by the
//! stable id makes the rename case actually reachable; the divergence is
//! pinned by tests.

use crate::namespace::ObjectNamespace;
use crate::store::note_store::NoteStore;
use log::debug;

/// Statistics from one resolver pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ResolvePass {
    /// Records whose cached name was rewritten to the current name.
    pub repaired: usize,
    /// Records whose cached name already matched.
    pub unchanged: usize,
    /// Records whose referenced object no longer exists.
    pub dangling: usize,
}

impl ResolvePass {
    /// Total records visited in this pass.
    pub fn total(&self) -> usize {
        self.repaired + self.unchanged + self.dangling
    }
}

/// Runs one repair pass over every record in the store.
///
/// Called once per host document-update notification; frequency and timing
/// are entirely host-controlled.
pub fn resolve_references(store: &mut NoteStore, ns: &impl ObjectNamespace) -> ResolvePass {
    let mut pass = ResolvePass::default();

    for record in store.iter_mut() {
        match ns.display_name(record.object_id) {
            Some(current) if current != record.object_reference => {
                debug!(
                    "event=reference_repaired module=resolver status=ok old={} new={}",
                    record.object_reference, current
                );
                record.object_reference = current;
                pass.repaired += 1;
            }
            Some(_) => pass.unchanged += 1,
            None => pass.dangling += 1,
        }
    }

    pass
}

#[cfg(test)]
mod tests {
    use super::{resolve_references, ResolvePass};
    use crate::model::note::{Category, NoteRecord};
    use crate::namespace::MemoryNamespace;
    use crate::store::note_store::NoteStore;

    #[test]
    fn pass_over_empty_store_is_all_zero() {
        let mut store = NoteStore::new();
        let ns = MemoryNamespace::new();
        assert_eq!(resolve_references(&mut store, &ns), ResolvePass::default());
    }

    #[test]
    fn matching_name_counts_as_unchanged() {
        let mut ns = MemoryNamespace::new();
        let id = ns.insert("Cube");
        let mut store = NoteStore::new();
        store.add(NoteRecord::new(id, "Cube", "T", "D", Category::Low));

        let pass = resolve_references(&mut store, &ns);
        assert_eq!(pass.unchanged, 1);
        assert_eq!(pass.total(), 1);
    }
}
