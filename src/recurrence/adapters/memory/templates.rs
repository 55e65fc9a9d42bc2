//! In-memory template repository for tests and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::domain::RecurringTaskId;
use crate::feed::{ChangeEvent, ChangeFeedHub, ChangeKind, Collection};
use crate::recurrence::{
    domain::RecurringTask,
    ports::{
        RecurringTaskRepository, RecurringTaskRepositoryError, RecurringTaskRepositoryResult,
    },
};

/// Thread-safe in-memory template repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryRecurringTaskRepository {
    state: Arc<RwLock<HashMap<RecurringTaskId, RecurringTask>>>,
    feed: Option<Arc<ChangeFeedHub>>,
}

impl InMemoryRecurringTaskRepository {
    /// Creates an empty repository with no change feed.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Publishes change events for this repository to the given hub.
    #[must_use]
    pub fn with_feed(mut self, feed: Arc<ChangeFeedHub>) -> Self {
        self.feed = Some(feed);
        self
    }

    fn publish(&self, kind: ChangeKind, id: RecurringTaskId) {
        if let Some(feed) = &self.feed {
            feed.publish(ChangeEvent::new(
                Collection::RecurringTasks,
                kind,
                id.to_string(),
            ));
        }
    }
}

fn lock_error(err: impl ToString) -> RecurringTaskRepositoryError {
    RecurringTaskRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl RecurringTaskRepository for InMemoryRecurringTaskRepository {
    async fn store(&self, template: &RecurringTask) -> RecurringTaskRepositoryResult<()> {
        {
            let mut state = self.state.write().map_err(lock_error)?;
            if state.contains_key(&template.id()) {
                return Err(RecurringTaskRepositoryError::DuplicateTemplate(
                    template.id(),
                ));
            }
            state.insert(template.id(), template.clone());
        }
        self.publish(ChangeKind::Insert, template.id());
        Ok(())
    }

    async fn update(&self, template: &RecurringTask) -> RecurringTaskRepositoryResult<()> {
        {
            let mut state = self.state.write().map_err(lock_error)?;
            if !state.contains_key(&template.id()) {
                return Err(RecurringTaskRepositoryError::NotFound(template.id()));
            }
            state.insert(template.id(), template.clone());
        }
        self.publish(ChangeKind::Update, template.id());
        Ok(())
    }

    async fn find_by_id(
        &self,
        id: RecurringTaskId,
    ) -> RecurringTaskRepositoryResult<Option<RecurringTask>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(&id).cloned())
    }

    async fn list_all(&self) -> RecurringTaskRepositoryResult<Vec<RecurringTask>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.values().cloned().collect())
    }
}
