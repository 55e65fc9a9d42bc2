//! In-memory board repositories for tests and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::board::{
    domain::{Task, TaskId, TaskInstance, TaskInstanceId, TaskStatus},
    ports::{
        BoardRepositoryError, BoardRepositoryResult, TaskInstanceRepository, TaskRepository,
    },
};
use crate::feed::{ChangeEvent, ChangeFeedHub, ChangeKind, Collection};

/// Thread-safe in-memory task repository.
///
/// When wired with a feed hub, every successful mutation publishes a change
/// event, which is how an in-process deployment drives live view refreshes.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskRepository {
    state: Arc<RwLock<HashMap<TaskId, Task>>>,
    feed: Option<Arc<ChangeFeedHub>>,
}

impl InMemoryTaskRepository {
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

    fn publish(&self, kind: ChangeKind, id: TaskId) {
        if let Some(feed) = &self.feed {
            feed.publish(ChangeEvent::new(Collection::Tasks, kind, id.to_string()));
        }
    }
}

fn lock_error(err: impl ToString) -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl TaskRepository for InMemoryTaskRepository {
    async fn store(&self, task: &Task) -> BoardRepositoryResult<()> {
        {
            let mut state = self.state.write().map_err(lock_error)?;
            if state.contains_key(&task.id()) {
                return Err(BoardRepositoryError::DuplicateTask(task.id()));
            }
            state.insert(task.id(), task.clone());
        }
        self.publish(ChangeKind::Insert, task.id());
        Ok(())
    }

    async fn update(&self, task: &Task) -> BoardRepositoryResult<()> {
        {
            let mut state = self.state.write().map_err(lock_error)?;
            if !state.contains_key(&task.id()) {
                return Err(BoardRepositoryError::TaskNotFound(task.id()));
            }
            state.insert(task.id(), task.clone());
        }
        self.publish(ChangeKind::Update, task.id());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(&id).cloned())
    }

    async fn list_all(&self) -> BoardRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.values().cloned().collect())
    }

    async fn list_by_status(&self, status: TaskStatus) -> BoardRepositoryResult<Vec<Task>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .values()
            .filter(|task| task.status() == status)
            .cloned()
            .collect())
    }

    async fn delete(&self, id: TaskId) -> BoardRepositoryResult<()> {
        {
            let mut state = self.state.write().map_err(lock_error)?;
            if state.remove(&id).is_none() {
                return Err(BoardRepositoryError::TaskNotFound(id));
            }
        }
        self.publish(ChangeKind::Delete, id);
        Ok(())
    }
}

/// Thread-safe in-memory instance repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryTaskInstanceRepository {
    state: Arc<RwLock<HashMap<TaskInstanceId, TaskInstance>>>,
    feed: Option<Arc<ChangeFeedHub>>,
}

impl InMemoryTaskInstanceRepository {
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

    fn publish(&self, kind: ChangeKind, id: TaskInstanceId) {
        if let Some(feed) = &self.feed {
            feed.publish(ChangeEvent::new(
                Collection::TaskInstances,
                kind,
                id.to_string(),
            ));
        }
    }
}

#[async_trait]
impl TaskInstanceRepository for InMemoryTaskInstanceRepository {
    async fn store(&self, instance: &TaskInstance) -> BoardRepositoryResult<()> {
        {
            let mut state = self.state.write().map_err(lock_error)?;
            if state.contains_key(&instance.id()) {
                return Err(BoardRepositoryError::DuplicateInstance(instance.id()));
            }
            state.insert(instance.id(), instance.clone());
        }
        self.publish(ChangeKind::Insert, instance.id());
        Ok(())
    }

    async fn update(&self, instance: &TaskInstance) -> BoardRepositoryResult<()> {
        {
            let mut state = self.state.write().map_err(lock_error)?;
            if !state.contains_key(&instance.id()) {
                return Err(BoardRepositoryError::InstanceNotFound(instance.id()));
            }
            state.insert(instance.id(), instance.clone());
        }
        self.publish(ChangeKind::Update, instance.id());
        Ok(())
    }

    async fn find_by_id(&self, id: TaskInstanceId) -> BoardRepositoryResult<Option<TaskInstance>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.get(&id).cloned())
    }

    async fn list_all(&self) -> BoardRepositoryResult<Vec<TaskInstance>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.values().cloned().collect())
    }

    async fn list_by_status(
        &self,
        status: TaskStatus,
    ) -> BoardRepositoryResult<Vec<TaskInstance>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .values()
            .filter(|instance| instance.status() == status)
            .cloned()
            .collect())
    }
}
