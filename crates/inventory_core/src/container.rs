//! Composition root.
//!
//! # Responsibility
//! - Build the repository the application layer consumes.
//! - Hand out the same repository instance for the container lifetime.
//!
//! # Invariants
//! - The repository is constructed lazily, at most once per container.
//! - Containers are explicit values passed to consumers; there is no
//!   global registry here.

use crate::context::AppContext;
use crate::db::InventoryDatabase;
use crate::repository::{ItemsRepository, OfflineItemsRepository, RepoResult};
use once_cell::sync::OnceCell;
use std::sync::Arc;

/// Dependency container for the application layer.
pub trait AppContainer: Send + Sync {
    fn items_repository(&self) -> RepoResult<Arc<dyn ItemsRepository>>;
}

#[derive(Debug)]
enum StoreSource {
    /// Resolve the process-wide store handle on first access.
    Context(AppContext),
    /// Use an already opened handle.
    Database(Arc<InventoryDatabase>),
}

/// Container wiring `OfflineItemsRepository` over the local store.
pub struct AppDataContainer {
    source: StoreSource,
    items_repository: OnceCell<Arc<dyn ItemsRepository>>,
}

impl AppDataContainer {
    /// Creates a container that opens the shared store from `context`.
    pub fn new(context: AppContext) -> Self {
        Self::from_source(StoreSource::Context(context))
    }

    /// Creates a container over an explicitly opened store handle.
    pub fn with_database(db: Arc<InventoryDatabase>) -> Self {
        Self::from_source(StoreSource::Database(db))
    }

    fn from_source(source: StoreSource) -> Self {
        Self {
            source,
            items_repository: OnceCell::new(),
        }
    }

    fn database(&self) -> RepoResult<Arc<InventoryDatabase>> {
        match &self.source {
            StoreSource::Context(context) => InventoryDatabase::get_database(context),
            StoreSource::Database(db) => Ok(Arc::clone(db)),
        }
    }
}

impl AppContainer for AppDataContainer {
    fn items_repository(&self) -> RepoResult<Arc<dyn ItemsRepository>> {
        self.items_repository
            .get_or_try_init(|| {
                let db = self.database()?;
                let repository: Arc<dyn ItemsRepository> =
                    Arc::new(OfflineItemsRepository::new(db.item_dao()));
                Ok(repository)
            })
            .cloned()
    }
}
