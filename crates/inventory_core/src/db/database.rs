//! Store handle lifecycle.
//!
//! # Responsibility
//! - Own the one SQLite connection and its invalidation tracker.
//! - Hand out a single process-wide handle, created on first request.
//! - Run store work on the blocking pool so async callers never block.
//!
//! # Invariants
//! - `get_database` constructs at most one handle per process, even when
//!   first called from many threads at once.
//! - Statements are serialized through the connection mutex.

use super::live::{live_query, LiveQuery};
use super::open::{open_connection, open_connection_in_memory};
use super::{DbError, DbResult, InvalidationTracker};
use crate::context::AppContext;
use crate::dao::item_dao::ItemDao;
use log::info;
use once_cell::sync::OnceCell;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

static INSTANCE: OnceCell<Arc<InventoryDatabase>> = OnceCell::new();

/// Open embedded inventory store.
#[derive(Debug)]
pub struct InventoryDatabase {
    conn: Mutex<Connection>,
    invalidation: InvalidationTracker,
    path: Option<PathBuf>,
}

impl InventoryDatabase {
    /// Returns the process-wide store handle, opening it on first use.
    ///
    /// Later calls return the existing handle regardless of `context`.
    ///
    /// # Errors
    /// - Returns the open/bootstrap error to the caller that attempted
    ///   construction. Nothing is cached on failure.
    pub fn get_database(context: &AppContext) -> DbResult<Arc<Self>> {
        // OnceCell re-checks under its internal lock, so racing first
        // callers still build exactly one handle.
        INSTANCE
            .get_or_try_init(|| {
                let path = context.database_path();
                info!(
                    "event=store_init module=db status=start path={}",
                    path.display()
                );
                Self::open(path).map(Arc::new)
            })
            .cloned()
    }

    /// Opens a standalone handle bound to `path`.
    ///
    /// Not registered as the process-wide instance.
    pub fn open(path: impl AsRef<Path>) -> DbResult<Self> {
        let path = path.as_ref().to_path_buf();
        let conn = open_connection(&path)?;
        Ok(Self::from_connection(conn, Some(path)))
    }

    /// Opens a standalone in-memory handle.
    pub fn open_in_memory() -> DbResult<Self> {
        let conn = open_connection_in_memory()?;
        Ok(Self::from_connection(conn, None))
    }

    fn from_connection(conn: Connection, path: Option<PathBuf>) -> Self {
        Self {
            conn: Mutex::new(conn),
            invalidation: InvalidationTracker::new(),
            path,
        }
    }

    /// Data access object bound to this handle.
    pub fn item_dao(self: &Arc<Self>) -> ItemDao {
        ItemDao::new(Arc::clone(self))
    }

    /// Backing file, or `None` for in-memory stores.
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn invalidation(&self) -> &InvalidationTracker {
        &self.invalidation
    }

    /// Runs `f` against the connection on tokio's blocking pool.
    pub async fn run<T, F>(self: &Arc<Self>, f: F) -> DbResult<T>
    where
        T: Send + 'static,
        F: FnOnce(&Connection) -> DbResult<T> + Send + 'static,
    {
        let db = Arc::clone(self);
        tokio::task::spawn_blocking(move || db.with_connection(f)).await?
    }

    /// Runs a mutating statement and notifies live queries when it changed rows.
    ///
    /// Returns the number of changed rows.
    pub async fn write<F>(self: &Arc<Self>, f: F) -> DbResult<usize>
    where
        F: FnOnce(&Connection) -> DbResult<usize> + Send + 'static,
    {
        let changed = self.run(f).await?;
        if changed > 0 {
            self.invalidation.notify_changed();
        }
        Ok(changed)
    }

    /// Builds a live stream of `query` snapshots over this handle.
    pub fn observe<T, F>(self: &Arc<Self>, label: &'static str, query: F) -> LiveQuery<T>
    where
        T: Send + 'static,
        F: Fn(&Connection) -> DbResult<T> + Send + Sync + 'static,
    {
        live_query(Arc::clone(self), label, query)
    }

    fn with_connection<T>(&self, f: impl FnOnce(&Connection) -> DbResult<T>) -> DbResult<T> {
        let conn = self.conn.lock().map_err(|_| DbError::ConnectionPoisoned)?;
        f(&*conn)
    }
}
