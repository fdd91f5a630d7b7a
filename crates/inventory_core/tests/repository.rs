mod common;

use common::next_snapshot;
use inventory_core::{
    DbError, InMemoryItemsRepository, InventoryDatabase, Item, ItemsRepository,
    OfflineItemsRepository,
};
use rusqlite::ErrorCode;
use std::sync::Arc;

fn offline_repository() -> Arc<dyn ItemsRepository> {
    let db = Arc::new(InventoryDatabase::open_in_memory().unwrap());
    Arc::new(OfflineItemsRepository::new(db.item_dao()))
}

fn in_memory_repository() -> Arc<dyn ItemsRepository> {
    Arc::new(InMemoryItemsRepository::new())
}

fn backends() -> [(&'static str, Arc<dyn ItemsRepository>); 2] {
    [
        ("offline", offline_repository()),
        ("in_memory", in_memory_repository()),
    ]
}

#[tokio::test]
async fn widget_lifecycle_matches_across_backends() {
    for (backend, repo) in backends() {
        repo.insert_item(&Item::new("Widget", 9.99, 5)).await.unwrap();
        let mut row = repo.get_item_stream(1);
        assert_eq!(
            next_snapshot(&mut row).await,
            Some(Item::with_id(1, "Widget", 9.99, 5)),
            "{backend}"
        );

        repo.insert_item(&Item::with_id(1, "Other", 1.0, 1))
            .await
            .unwrap();
        assert_eq!(
            next_snapshot(&mut repo.get_item_stream(1)).await,
            Some(Item::with_id(1, "Widget", 9.99, 5)),
            "{backend}"
        );

        repo.update_item(&Item::with_id(1, "Widget", 12.50, 5))
            .await
            .unwrap();
        assert_eq!(
            next_snapshot(&mut row).await,
            Some(Item::with_id(1, "Widget", 12.50, 5)),
            "{backend}"
        );

        repo.delete_item(&Item::with_id(1, "Widget", 12.50, 5))
            .await
            .unwrap();
        assert_eq!(next_snapshot(&mut row).await, None, "{backend}");
        assert!(
            next_snapshot(&mut repo.get_all_items_stream())
                .await
                .is_empty(),
            "{backend}"
        );
    }
}

#[tokio::test]
async fn listing_order_and_id_assignment_match_across_backends() {
    for (backend, repo) in backends() {
        for (name, price) in [("b-gear", 3.0), ("a-bolt", 0.5), ("c-nut", -1.0)] {
            repo.insert_item(&Item::new(name, price, 1)).await.unwrap();
        }
        repo.insert_item(&Item::with_id(10, "d-axle", 7.0, 2))
            .await
            .unwrap();
        repo.insert_item(&Item::new("e-cog", 1.0, 0)).await.unwrap();

        let items = next_snapshot(&mut repo.get_all_items_stream()).await;
        let listed = items
            .iter()
            .map(|item| (item.id, item.name.as_str()))
            .collect::<Vec<_>>();
        assert_eq!(
            listed,
            [(2, "a-bolt"), (1, "b-gear"), (3, "c-nut"), (10, "d-axle"), (11, "e-cog")],
            "{backend}"
        );
    }
}

#[tokio::test]
async fn absent_updates_and_deletes_are_silent_across_backends() {
    for (backend, repo) in backends() {
        repo.update_item(&Item::with_id(5, "Ghost", 1.0, 1))
            .await
            .unwrap();
        repo.delete_item(&Item::with_id(5, "Ghost", 1.0, 1))
            .await
            .unwrap();

        assert_eq!(
            next_snapshot(&mut repo.get_item_stream(5)).await,
            None,
            "{backend}"
        );
        assert!(
            next_snapshot(&mut repo.get_all_items_stream())
                .await
                .is_empty(),
            "{backend}"
        );
    }
}

#[tokio::test]
async fn list_stream_follows_writes_across_backends() {
    for (backend, repo) in backends() {
        let mut all = repo.get_all_items_stream();
        assert!(next_snapshot(&mut all).await.is_empty(), "{backend}");

        repo.insert_item(&Item::new("Widget", 9.99, 5)).await.unwrap();
        assert_eq!(
            next_snapshot(&mut all).await,
            vec![Item::with_id(1, "Widget", 9.99, 5)],
            "{backend}"
        );

        repo.update_item(&Item::with_id(1, "Gizmo", 9.99, 4))
            .await
            .unwrap();
        assert_eq!(
            next_snapshot(&mut all).await,
            vec![Item::with_id(1, "Gizmo", 9.99, 4)],
            "{backend}"
        );

        repo.delete_item(&Item::with_id(1, "Gizmo", 9.99, 4))
            .await
            .unwrap();
        assert!(next_snapshot(&mut all).await.is_empty(), "{backend}");
    }
}

#[tokio::test]
async fn exhausted_ids_fail_as_store_fault_across_backends() {
    for (backend, repo) in backends() {
        repo.insert_item(&Item::with_id(i64::MAX, "last", 1.0, 1))
            .await
            .unwrap();

        let err = repo
            .insert_item(&Item::new("overflow", 1.0, 1))
            .await
            .unwrap_err();
        assert!(
            matches!(
                &err,
                DbError::Sqlite(rusqlite::Error::SqliteFailure(failure, _))
                    if failure.code == ErrorCode::DiskFull
            ),
            "{backend}: {err}"
        );
        assert_eq!(
            next_snapshot(&mut repo.get_all_items_stream()).await,
            vec![Item::with_id(i64::MAX, "last", 1.0, 1)],
            "{backend}"
        );
    }
}
