//! Recorder port for the append-only activity log.

use crate::activity::domain::ActivityEntry;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for activity recorder operations.
pub type ActivityRecorderResult<T> = Result<T, ActivityRecorderError>;

/// Append-only activity log contract. Entries are never updated or deleted.
#[async_trait]
pub trait ActivityRecorder: Send + Sync {
    /// Appends one entry.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRecorderError`] when the backend rejects the append.
    async fn append(&self, entry: &ActivityEntry) -> ActivityRecorderResult<()>;

    /// Returns the entries referring to the given entity, oldest first.
    async fn list_for_entity(&self, entity_id: &str) -> ActivityRecorderResult<Vec<ActivityEntry>>;
}

/// Errors returned by activity recorder implementations.
#[derive(Debug, Clone, Error)]
pub enum ActivityRecorderError {
    /// The backend rejected the operation for authorization reasons.
    #[error("operation rejected by the backend: {0}")]
    Rejected(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl ActivityRecorderError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}

/// Appends an entry without letting a failure reach the caller.
///
/// History is a side channel: losing one record must never fail the primary
/// operation it was describing, so append failures are logged and swallowed.
pub async fn record_best_effort<A>(recorder: &A, entry: ActivityEntry)
where
    A: ActivityRecorder + ?Sized,
{
    if let Err(err) = recorder.append(&entry).await {
        log::warn!(
            "activity entry {} ({}) for {} was dropped: {err}",
            entry.id(),
            entry.action(),
            entry.entity_id(),
        );
    }
}
