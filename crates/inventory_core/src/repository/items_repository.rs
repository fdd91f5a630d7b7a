//! Item repository contract.

use crate::db::DbError;
use crate::model::item::{Item, ItemId};
use async_trait::async_trait;
use futures::stream::BoxStream;

pub type RepoResult<T> = Result<T, DbError>;

/// Live stream of snapshots, replayed on subscribe.
pub type ItemStream<T> = BoxStream<'static, RepoResult<T>>;

/// Capability set over stored items.
///
/// Streams push a fresh snapshot after every change to the item set.
/// Writes resolve once the change is durable in the backing store.
#[async_trait]
pub trait ItemsRepository: Send + Sync {
    /// All items ordered by name ascending.
    fn get_all_items_stream(&self) -> ItemStream<Vec<Item>>;

    /// The item with `id`, or `None` while it does not exist.
    fn get_item_stream(&self, id: ItemId) -> ItemStream<Option<Item>>;

    /// Inserts `item`; silently ignored when its id is already taken.
    async fn insert_item(&self, item: &Item) -> RepoResult<()>;

    /// Deletes the item with `item.id`; no-op when absent.
    async fn delete_item(&self, item: &Item) -> RepoResult<()>;

    /// Replaces the stored fields of `item.id`; no-op when absent.
    async fn update_item(&self, item: &Item) -> RepoResult<()>;
}
