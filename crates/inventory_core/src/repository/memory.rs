//! In-memory repository backing.
//!
//! # Responsibility
//! - Satisfy `ItemsRepository` without a database, for tests and previews.
//!
//! # Invariants
//! - Id assignment mirrors SQLite `AUTOINCREMENT`: ids are never reused,
//!   even after the highest row is deleted.
//! - Once `i64::MAX` has been used, unset-id inserts fail with the same
//!   `SQLITE_FULL` fault the store reports.
//! - Conflict, absence and ordering semantics match the store-backed
//!   repository.

use super::items_repository::{ItemStream, ItemsRepository, RepoResult};
use crate::db::{DbError, InvalidationTracker};
use crate::model::item::{Item, ItemId, UNSET_ITEM_ID};
use async_trait::async_trait;
use futures::StreamExt;
use rusqlite::ffi;
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio_stream::wrappers::WatchStream;

#[derive(Debug, Default)]
struct MemoryRows {
    rows: BTreeMap<ItemId, Item>,
    last_id: ItemId,
}

/// Repository over a process-local map.
#[derive(Debug, Clone, Default)]
pub struct InMemoryItemsRepository {
    rows: Arc<Mutex<MemoryRows>>,
    invalidation: Arc<InvalidationTracker>,
}

impl InMemoryItemsRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn observe<T, F>(&self, project: F) -> ItemStream<T>
    where
        T: Send + 'static,
        F: Fn(&MemoryRows) -> T + Send + 'static,
    {
        let rows = Arc::clone(&self.rows);
        WatchStream::new(self.invalidation.subscribe())
            .map(move |_| Ok::<T, DbError>(project(&*lock_rows(&rows))))
            .boxed()
    }

    fn mutate(&self, f: impl FnOnce(&mut MemoryRows) -> RepoResult<bool>) -> RepoResult<()> {
        let changed = f(&mut *lock_rows(&self.rows))?;
        if changed {
            self.invalidation.notify_changed();
        }
        Ok(())
    }
}

// SQLite reports SQLITE_FULL once AUTOINCREMENT has handed out i64::MAX.
fn ids_exhausted() -> DbError {
    DbError::Sqlite(rusqlite::Error::SqliteFailure(
        ffi::Error::new(ffi::SQLITE_FULL),
        None,
    ))
}

// Every mutation is a single map operation, so a poisoned guard still
// holds consistent rows.
fn lock_rows(rows: &Mutex<MemoryRows>) -> MutexGuard<'_, MemoryRows> {
    rows.lock().unwrap_or_else(PoisonError::into_inner)
}

#[async_trait]
impl ItemsRepository for InMemoryItemsRepository {
    fn get_all_items_stream(&self) -> ItemStream<Vec<Item>> {
        self.observe(|state| {
            let mut items = state.rows.values().cloned().collect::<Vec<_>>();
            // Byte-wise, matching SQLite's BINARY collation.
            items.sort_by(|a, b| a.name.cmp(&b.name));
            items
        })
    }

    fn get_item_stream(&self, id: ItemId) -> ItemStream<Option<Item>> {
        self.observe(move |state| state.rows.get(&id).cloned())
    }

    async fn insert_item(&self, item: &Item) -> RepoResult<()> {
        self.mutate(|state| {
            let id = if item.id == UNSET_ITEM_ID {
                state.last_id.checked_add(1).ok_or_else(ids_exhausted)?
            } else {
                item.id
            };
            if state.rows.contains_key(&id) {
                return Ok(false);
            }
            state.last_id = state.last_id.max(id);
            state.rows.insert(id, Item { id, ..item.clone() });
            Ok(true)
        })
    }

    async fn delete_item(&self, item: &Item) -> RepoResult<()> {
        self.mutate(|state| Ok(state.rows.remove(&item.id).is_some()))
    }

    async fn update_item(&self, item: &Item) -> RepoResult<()> {
        self.mutate(|state| match state.rows.get_mut(&item.id) {
            Some(row) => {
                *row = item.clone();
                Ok(true)
            }
            None => Ok(false),
        })
    }
}
