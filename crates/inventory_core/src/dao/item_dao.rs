//! Item data access object.
//!
//! # Responsibility
//! - Provide insert/update/delete and live reads over `items`.
//!
//! # Invariants
//! - Inserts use `OR IGNORE`: an existing id leaves the stored row untouched.
//! - An unset id (`0`) binds `NULL` so SQLite assigns the next id.
//! - Listing order is `name ASC` under the default `BINARY` collation.

use crate::db::{DbResult, InventoryDatabase, LiveQuery};
use crate::model::item::{Item, ItemId, UNSET_ITEM_ID};
use log::debug;
use rusqlite::{params, Connection, OptionalExtension, Row};
use std::sync::Arc;

const ITEM_SELECT_SQL: &str = "SELECT
    id,
    name,
    price,
    quantity
FROM items";

/// SQLite-backed item data access.
#[derive(Debug, Clone)]
pub struct ItemDao {
    db: Arc<InventoryDatabase>,
}

impl ItemDao {
    pub fn new(db: Arc<InventoryDatabase>) -> Self {
        Self { db }
    }

    /// Inserts a new row, ignoring it when the id already exists.
    pub async fn insert(&self, item: &Item) -> DbResult<()> {
        let item = item.clone();
        let changed = self.db.write(move |conn| insert_item(conn, &item)).await?;
        debug!(
            "event=item_insert module=dao status={}",
            if changed == 0 { "ignored" } else { "ok" }
        );
        Ok(())
    }

    /// Overwrites name/price/quantity of the row with `item.id`.
    pub async fn update(&self, item: &Item) -> DbResult<()> {
        let item = item.clone();
        let changed = self.db.write(move |conn| update_item(conn, &item)).await?;
        debug!(
            "event=item_update module=dao status={} changed={changed}",
            if changed == 0 { "absent" } else { "ok" }
        );
        Ok(())
    }

    /// Removes the row with `item.id`.
    pub async fn delete(&self, item: &Item) -> DbResult<()> {
        let id = item.id;
        let changed = self.db.write(move |conn| delete_item(conn, id)).await?;
        debug!(
            "event=item_delete module=dao status={} changed={changed}",
            if changed == 0 { "absent" } else { "ok" }
        );
        Ok(())
    }

    /// Live view of one row; yields `None` while the id is absent.
    pub fn get_item(&self, id: ItemId) -> LiveQuery<Option<Item>> {
        self.db.observe("get_item", move |conn| select_item(conn, id))
    }

    /// Live view of all rows ordered by name.
    pub fn get_all_items(&self) -> LiveQuery<Vec<Item>> {
        self.db.observe("get_all_items", select_all_items)
    }

    /// One-shot row count.
    pub async fn count(&self) -> DbResult<i64> {
        self.db
            .run(|conn| {
                let count: i64 =
                    conn.query_row("SELECT COUNT(*) FROM items;", [], |row| row.get(0))?;
                Ok(count)
            })
            .await
    }
}

fn insert_item(conn: &Connection, item: &Item) -> DbResult<usize> {
    let changed = conn.execute(
        "INSERT OR IGNORE INTO items (
            id,
            name,
            price,
            quantity
        ) VALUES (?1, ?2, ?3, ?4);",
        params![
            id_to_db(item.id),
            item.name.as_str(),
            item.price,
            item.quantity,
        ],
    )?;
    Ok(changed)
}

fn update_item(conn: &Connection, item: &Item) -> DbResult<usize> {
    let changed = conn.execute(
        "UPDATE items
         SET
            name = ?1,
            price = ?2,
            quantity = ?3
         WHERE id = ?4;",
        params![item.name.as_str(), item.price, item.quantity, item.id],
    )?;
    Ok(changed)
}

fn delete_item(conn: &Connection, id: ItemId) -> DbResult<usize> {
    let changed = conn.execute("DELETE FROM items WHERE id = ?1;", [id])?;
    Ok(changed)
}

fn select_item(conn: &Connection, id: ItemId) -> DbResult<Option<Item>> {
    let item = conn
        .query_row(
            &format!("{ITEM_SELECT_SQL} WHERE id = ?1;"),
            [id],
            parse_item_row,
        )
        .optional()?;
    Ok(item)
}

fn select_all_items(conn: &Connection) -> DbResult<Vec<Item>> {
    let mut stmt = conn.prepare_cached(&format!("{ITEM_SELECT_SQL} ORDER BY name ASC;"))?;
    let items = stmt
        .query_map([], parse_item_row)?
        .collect::<Result<Vec<_>, _>>()?;
    Ok(items)
}

fn parse_item_row(row: &Row<'_>) -> rusqlite::Result<Item> {
    Ok(Item {
        id: row.get("id")?,
        name: row.get("name")?,
        price: row.get("price")?,
        quantity: row.get("quantity")?,
    })
}

fn id_to_db(id: ItemId) -> Option<ItemId> {
    if id == UNSET_ITEM_ID {
        None
    } else {
        Some(id)
    }
}
