//! Inventory domain model.
//!
//! # Responsibility
//! - Define the record shape persisted in the `items` table.
//!
//! # Invariants
//! - `Item::id` is assigned by the store; `0` means "not yet persisted".
//! - The model is one flat table with no cross-record references.

pub mod item;
