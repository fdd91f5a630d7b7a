//! Table invalidation tracking for live queries.
//!
//! Writers bump a version counter after each statement that changed rows;
//! live queries hold a receiver and re-run when the counter moves.

use tokio::sync::watch::{self, Receiver, Sender};

/// Version counter for the `items` table.
///
/// Backed by `tokio::sync::watch`, so a slow subscriber only ever sees the
/// latest version; intermediate bumps are conflated.
#[derive(Debug)]
pub struct InvalidationTracker {
    sender: Sender<u64>,
}

impl InvalidationTracker {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(0);
        Self { sender }
    }

    /// Subscribe to invalidations after the current version.
    pub fn subscribe(&self) -> Receiver<u64> {
        self.sender.subscribe()
    }

    /// Records a table change and wakes all subscribers.
    ///
    /// Called by writers after a statement reports a non-zero change count.
    pub fn notify_changed(&self) {
        // send_modify succeeds without receivers.
        self.sender.send_modify(|version| *version = version.wrapping_add(1));
    }

    /// Current table version.
    #[must_use]
    pub fn version(&self) -> u64 {
        *self.sender.borrow()
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn receiver_count(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for InvalidationTracker {
    fn default() -> Self {
        Self::new()
    }
}
