//! Domain model for object annotations.
//!
//! # Responsibility
//! - Define the canonical note record shared by store, session and resolver.
//! - Define the fixed category enumeration and its filter-side superset.
//!
//! # Invariants
//! - Every note keeps a stable `ObjectId` for its referenced scene object.
//! - `CategoryFilter::All` exists only on the filter side and is never
//!   stored on a record.

pub mod note;
