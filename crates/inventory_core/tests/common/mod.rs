//! Shared helpers for inventory_core integration tests.

#![allow(dead_code)]

use futures::{Stream, StreamExt};
use inventory_core::DbError;
use std::time::Duration;
use tokio::time::timeout;

const EMISSION_TIMEOUT: Duration = Duration::from_secs(5);

/// Awaits the next successful snapshot from a live stream.
pub async fn next_snapshot<T, S>(stream: &mut S) -> T
where
    S: Stream<Item = Result<T, DbError>> + Unpin,
{
    timeout(EMISSION_TIMEOUT, stream.next())
        .await
        .expect("stream emission timed out")
        .expect("stream ended unexpectedly")
        .expect("stream reported a store fault")
}

/// Asserts the stream stays quiet for a short window.
pub async fn assert_no_emission<T, S>(stream: &mut S)
where
    S: Stream<Item = Result<T, DbError>> + Unpin,
{
    let next = timeout(Duration::from_millis(150), stream.next()).await;
    assert!(next.is_err(), "stream emitted without a table change");
}
