//! Item record.
//!
//! # Responsibility
//! - Define the single inventory record (name, price, quantity).
//! - Provide constructors for unpersisted and id-keyed items.
//!
//! # Invariants
//! - `id == UNSET_ITEM_ID` until the store assigns a durable id.
//! - `price` and `quantity` are stored as given; no range is enforced here.

use serde::{Deserialize, Serialize};

/// Store-assigned row identifier.
pub type ItemId = i64;

/// Id carried by an item that has not been inserted yet.
pub const UNSET_ITEM_ID: ItemId = 0;

/// One row of the `items` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    /// Auto-increment primary key. `0` before insertion.
    #[serde(default)]
    pub id: ItemId,
    pub name: String,
    /// Unit price. Negative and zero values are accepted.
    pub price: f64,
    /// Units in stock. Negative values are accepted.
    pub quantity: i64,
}

impl Item {
    /// Creates an unpersisted item; the store assigns its id on insert.
    pub fn new(name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self::with_id(UNSET_ITEM_ID, name, price, quantity)
    }

    /// Creates an item keyed by an existing id.
    ///
    /// Used by update/delete paths where identity is already known.
    pub fn with_id(id: ItemId, name: impl Into<String>, price: f64, quantity: i64) -> Self {
        Self {
            id,
            name: name.into(),
            price,
            quantity,
        }
    }

    /// Returns whether this item carries a store-assigned id.
    pub fn is_persisted(&self) -> bool {
        self.id != UNSET_ITEM_ID
    }
}
