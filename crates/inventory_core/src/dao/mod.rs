//! Data access layer.
//!
//! # Responsibility
//! - Translate typed item operations into SQL against the `items` table.
//! - Keep SQL details inside the core persistence boundary.
//!
//! # Invariants
//! - Conflicting inserts, and updates/deletes of absent ids, are silent no-ops.
//! - Store faults propagate unchanged; nothing is retried here.

pub mod item_dao;
