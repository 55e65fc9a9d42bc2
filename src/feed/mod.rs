//! In-process change feed and the view refresh bridge.
//!
//! Repositories publish change events into the [`ChangeFeedHub`]; a board
//! view opens a [`RefreshBridge`] subscription over the collections it
//! renders and re-fetches its snapshot whenever any of them changes.

mod bridge;
mod event;
mod hub;

pub use bridge::{FeedSubscription, RefreshBridge, RefreshCallback};
pub use event::{ChangeEvent, ChangeKind, Collection};
pub use hub::ChangeFeedHub;

#[cfg(test)]
mod tests;
