//! Live query streams over the store.
//!
//! # Responsibility
//! - Turn a read-only query into a push-based stream of snapshots.
//!
//! # Invariants
//! - The first poll runs the query (replay on subscribe).
//! - Each table invalidation after that yields one fresh snapshot; bursts
//!   of writes between polls collapse into the latest snapshot.
//! - A store fault is yielded once as `Err`, then the stream ends.
//! - Dropping the stream stops it; writes already issued are unaffected.

use super::{DbResult, InventoryDatabase};
use futures::stream::{self, BoxStream, StreamExt};
use log::{debug, error};
use rusqlite::Connection;
use std::sync::Arc;
use tokio_stream::wrappers::WatchStream;

/// Stream of query snapshots.
pub type LiveQuery<T> = BoxStream<'static, DbResult<T>>;

struct LiveQueryState<F> {
    db: Arc<InventoryDatabase>,
    changes: WatchStream<u64>,
    query: Arc<F>,
    failed: bool,
}

/// Builds a live stream that re-runs `query` after every table change.
///
/// `label` only tags log events.
pub fn live_query<T, F>(db: Arc<InventoryDatabase>, label: &'static str, query: F) -> LiveQuery<T>
where
    T: Send + 'static,
    F: Fn(&Connection) -> DbResult<T> + Send + Sync + 'static,
{
    let changes = WatchStream::new(db.invalidation().subscribe());
    let state = LiveQueryState {
        db,
        changes,
        query: Arc::new(query),
        failed: false,
    };

    stream::unfold(state, move |mut state| async move {
        if state.failed {
            return None;
        }
        let Some(version) = state.changes.next().await else {
            return None;
        };

        let query = Arc::clone(&state.query);
        let result = state.db.run(move |conn| (*query)(conn)).await;
        match &result {
            Ok(_) => debug!("event=live_query module=db status=ok query={label} version={version}"),
            Err(err) => {
                error!(
                    "event=live_query module=db status=error query={label} version={version} error={err}"
                );
                state.failed = true;
            }
        }
        Some((result, state))
    })
    .boxed()
}
