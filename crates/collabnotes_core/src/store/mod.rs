//! In-memory note storage owned by the current document.
//!
//! # Responsibility
//! - Provide positional CRUD over the ordered note collection.
//! - Keep index semantics explicit: indices are positions, not stable ids.
//!
//! # Invariants
//! - Insertion order is display order; removal shifts later indices down.
//! - Out-of-range access fails fast with `StoreError::IndexOutOfRange`.

pub mod note_store;
