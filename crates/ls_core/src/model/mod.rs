//! Domain model for seeded project records.
//!
//! # Invariants
//! - A project without an `id` has never been persisted.
//! - Identity is assigned by the store, never by callers.

pub mod project;
