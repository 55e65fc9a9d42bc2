//! Refresh bridge: change notifications in, one re-fetch callback out.

use super::{ChangeFeedHub, Collection};
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tokio::task::JoinHandle;

/// Shared re-fetch callback invoked on every change notification.
pub type RefreshCallback = Arc<dyn Fn() + Send + Sync>;

/// Wires a set of watched collections to a single re-fetch callback.
///
/// The bridge never interprets events as deltas: any insert, update, or
/// delete on any watched collection asks the view to replace its state with
/// a fresh snapshot. Nothing debounces the callback, so near-simultaneous
/// changes on several collections may each trigger it; the callback must be
/// safe to run redundantly.
pub struct RefreshBridge;

impl RefreshBridge {
    /// Starts watching the given collections.
    ///
    /// The returned subscription owns one forwarding task per collection and
    /// closes all of them when dropped, so a torn-down view cannot leave
    /// dangling watchers behind.
    #[must_use]
    pub fn watch(
        hub: &ChangeFeedHub,
        collections: &[Collection],
        on_change: RefreshCallback,
    ) -> FeedSubscription {
        let tasks = collections
            .iter()
            .map(|&collection| {
                let mut receiver = hub.subscribe(collection);
                let callback = Arc::clone(&on_change);
                tokio::spawn(async move {
                    loop {
                        match receiver.recv().await {
                            Ok(_event) => callback(),
                            Err(RecvError::Lagged(missed)) => {
                                // A lagged watcher re-fetches anyway; the
                                // snapshot it pulls already reflects the
                                // events it missed.
                                log::warn!(
                                    "change feed for {collection} lagged by {missed} events"
                                );
                                callback();
                            }
                            Err(RecvError::Closed) => break,
                        }
                    }
                })
            })
            .collect();
        FeedSubscription { tasks }
    }
}

/// Owner of the forwarding tasks behind one [`RefreshBridge::watch`] call.
pub struct FeedSubscription {
    tasks: Vec<JoinHandle<()>>,
}

impl FeedSubscription {
    /// Returns how many collections this subscription watches.
    #[must_use]
    pub fn watched(&self) -> usize {
        self.tasks.len()
    }

    /// Stops watching. Equivalent to dropping the subscription.
    pub fn close(self) {
        // Drop runs the aborts.
    }

    fn abort_all(&self) {
        for task in &self.tasks {
            task.abort();
        }
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        self.abort_all();
    }
}
