//! Repository backed by the local SQLite store.

use super::items_repository::{ItemStream, ItemsRepository, RepoResult};
use crate::dao::item_dao::ItemDao;
use crate::model::item::{Item, ItemId};
use async_trait::async_trait;

/// Offline repository delegating each capability to `ItemDao`.
#[derive(Debug, Clone)]
pub struct OfflineItemsRepository {
    item_dao: ItemDao,
}

impl OfflineItemsRepository {
    pub fn new(item_dao: ItemDao) -> Self {
        Self { item_dao }
    }
}

#[async_trait]
impl ItemsRepository for OfflineItemsRepository {
    fn get_all_items_stream(&self) -> ItemStream<Vec<Item>> {
        self.item_dao.get_all_items()
    }

    fn get_item_stream(&self, id: ItemId) -> ItemStream<Option<Item>> {
        self.item_dao.get_item(id)
    }

    async fn insert_item(&self, item: &Item) -> RepoResult<()> {
        self.item_dao.insert(item).await
    }

    async fn delete_item(&self, item: &Item) -> RepoResult<()> {
        self.item_dao.delete(item).await
    }

    async fn update_item(&self, item: &Item) -> RepoResult<()> {
        self.item_dao.update(item).await
    }
}
