//! Persistence core for the inventory tracker.
//! Stores item records in an embedded SQLite file and exposes them through
//! a storage-independent repository with live query streams.

pub mod container;
pub mod context;
pub mod dao;
pub mod db;
pub mod logging;
pub mod model;
pub mod repository;

pub use container::{AppContainer, AppDataContainer};
pub use context::AppContext;
pub use dao::item_dao::ItemDao;
pub use db::{DbError, DbResult, InventoryDatabase, LiveQuery, DATABASE_NAME};
pub use logging::{default_log_level, init_logging, logging_status, LogSettings, LoggingError};
pub use model::item::{Item, ItemId, UNSET_ITEM_ID};
pub use repository::{
    InMemoryItemsRepository, ItemStream, ItemsRepository, OfflineItemsRepository, RepoResult,
};

/// Minimal health-check API for smoke checks.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
