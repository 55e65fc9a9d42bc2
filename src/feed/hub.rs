//! Broadcast hub fanning change events out to watchers.

use super::{ChangeEvent, Collection};
use std::collections::HashMap;
use tokio::sync::broadcast;

/// Default per-collection channel capacity.
const DEFAULT_CAPACITY: usize = 256;

/// In-process change-notification hub.
///
/// One broadcast channel per collection; publishing is fire-and-forget and
/// a collection without watchers simply drops its events.
#[derive(Debug)]
pub struct ChangeFeedHub {
    channels: HashMap<Collection, broadcast::Sender<ChangeEvent>>,
}

impl ChangeFeedHub {
    /// Creates a hub with the default channel capacity.
    #[must_use]
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Creates a hub whose channels buffer up to `capacity` events each.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let channels = Collection::ALL
            .into_iter()
            .map(|collection| {
                let (sender, _) = broadcast::channel(capacity);
                (collection, sender)
            })
            .collect();
        Self { channels }
    }

    /// Publishes a change event to the collection's watchers.
    pub fn publish(&self, event: ChangeEvent) {
        if let Some(sender) = self.channels.get(&event.collection) {
            // send only fails when nobody is listening, which is fine.
            if sender.send(event).is_err() {
                log::trace!("change event dropped: no watchers");
            }
        }
    }

    /// Opens a receiver for one collection's change events.
    ///
    /// Missing channels cannot happen (every collection gets one at
    /// construction); a fresh detached receiver is returned as a fallback to
    /// keep this infallible for callers.
    #[must_use]
    pub fn subscribe(&self, collection: Collection) -> broadcast::Receiver<ChangeEvent> {
        self.channels.get(&collection).map_or_else(
            || broadcast::channel(DEFAULT_CAPACITY).1,
            broadcast::Sender::subscribe,
        )
    }

    /// Returns how many watchers a collection currently has.
    #[must_use]
    pub fn watcher_count(&self, collection: Collection) -> usize {
        self.channels
            .get(&collection)
            .map_or(0, broadcast::Sender::receiver_count)
    }
}

impl Default for ChangeFeedHub {
    fn default() -> Self {
        Self::new()
    }
}
