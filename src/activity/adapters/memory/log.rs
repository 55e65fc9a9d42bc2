//! In-memory activity log for tests and single-process deployments.

use async_trait::async_trait;
use std::sync::{Arc, RwLock};

use crate::activity::{
    domain::ActivityEntry,
    ports::{ActivityRecorder, ActivityRecorderError, ActivityRecorderResult},
};

/// Thread-safe in-memory activity log. Append order is preserved.
#[derive(Debug, Clone, Default)]
pub struct InMemoryActivityLog {
    entries: Arc<RwLock<Vec<ActivityEntry>>>,
}

impl InMemoryActivityLog {
    /// Creates an empty in-memory log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every entry in append order.
    ///
    /// # Errors
    ///
    /// Returns [`ActivityRecorderError::Persistence`] when the backing lock
    /// is poisoned.
    pub fn all(&self) -> ActivityRecorderResult<Vec<ActivityEntry>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries.clone())
    }
}

fn lock_error(err: impl ToString) -> ActivityRecorderError {
    ActivityRecorderError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl ActivityRecorder for InMemoryActivityLog {
    async fn append(&self, entry: &ActivityEntry) -> ActivityRecorderResult<()> {
        let mut entries = self.entries.write().map_err(lock_error)?;
        entries.push(entry.clone());
        Ok(())
    }

    async fn list_for_entity(&self, entity_id: &str) -> ActivityRecorderResult<Vec<ActivityEntry>> {
        let entries = self.entries.read().map_err(lock_error)?;
        Ok(entries
            .iter()
            .filter(|entry| entry.entity_id() == entity_id)
            .cloned()
            .collect())
    }
}
