//! SQLite store handle, bootstrap and change notification.
//!
//! # Responsibility
//! - Open and configure the single SQLite connection behind the store.
//! - Create the fixed `items` schema on first open.
//! - Publish table invalidations that drive live query streams.
//!
//! # Invariants
//! - Schema version is tracked via `PRAGMA user_version` and fixed at 1.
//! - Core code must not read/write items before the schema check succeeds.
//! - At most one process-wide handle is created through `get_database`.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod database;
pub mod invalidation;
pub mod live;
mod open;
pub mod schema;

pub use database::InventoryDatabase;
pub use invalidation::InvalidationTracker;
pub use live::{live_query, LiveQuery};
pub use open::{open_connection, open_connection_in_memory};

/// File name of the backing database inside the context data directory.
pub const DATABASE_NAME: &str = "item_database";

pub type DbResult<T> = Result<T, DbError>;

#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        supported: u32,
    },
    /// A previous holder of the connection lock panicked mid-statement.
    ConnectionPoisoned,
    /// The blocking store task was cancelled or panicked.
    Task(String),
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                supported,
            } => write!(
                f,
                "database schema version {db_version} does not match supported version {supported}"
            ),
            Self::ConnectionPoisoned => write!(f, "database connection lock is poisoned"),
            Self::Task(message) => write!(f, "database task failed: {message}"),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } | Self::ConnectionPoisoned | Self::Task(_) => {
                None
            }
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<tokio::task::JoinError> for DbError {
    fn from(value: tokio::task::JoinError) -> Self {
        Self::Task(value.to_string())
    }
}
