//! Repository ports for board card persistence.
//!
//! Standalone tasks and recurring instances persist to separate collections;
//! each gets its own contract so callers can only write a card to the
//! collection its variant belongs to.

use crate::board::domain::{Task, TaskId, TaskInstance, TaskInstanceId, TaskStatus};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for board repository operations.
pub type BoardRepositoryResult<T> = Result<T, BoardRepositoryError>;

/// Standalone task persistence contract.
#[async_trait]
pub trait TaskRepository: Send + Sync {
    /// Stores a new task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateTask`] when the task ID
    /// already exists.
    async fn store(&self, task: &Task) -> BoardRepositoryResult<()>;

    /// Persists changes to an existing task (status, timestamps, card data).
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn update(&self, task: &Task) -> BoardRepositoryResult<()>;

    /// Finds a task by identifier.
    ///
    /// Returns `None` when the task does not exist.
    async fn find_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>>;

    /// Returns all tasks.
    async fn list_all(&self) -> BoardRepositoryResult<Vec<Task>>;

    /// Returns the tasks currently in the given column.
    async fn list_by_status(&self, status: TaskStatus) -> BoardRepositoryResult<Vec<Task>>;

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::TaskNotFound`] when the task does not
    /// exist.
    async fn delete(&self, id: TaskId) -> BoardRepositoryResult<()>;
}

/// Recurring-instance persistence contract.
#[async_trait]
pub trait TaskInstanceRepository: Send + Sync {
    /// Stores a new instance.
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::DuplicateInstance`] when the instance
    /// ID already exists.
    async fn store(&self, instance: &TaskInstance) -> BoardRepositoryResult<()>;

    /// Persists changes to an existing instance (status, timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`BoardRepositoryError::InstanceNotFound`] when the instance
    /// does not exist.
    async fn update(&self, instance: &TaskInstance) -> BoardRepositoryResult<()>;

    /// Finds an instance by identifier.
    ///
    /// Returns `None` when the instance does not exist.
    async fn find_by_id(&self, id: TaskInstanceId) -> BoardRepositoryResult<Option<TaskInstance>>;

    /// Returns all instances.
    async fn list_all(&self) -> BoardRepositoryResult<Vec<TaskInstance>>;

    /// Returns the instances currently in the given column.
    async fn list_by_status(&self, status: TaskStatus)
    -> BoardRepositoryResult<Vec<TaskInstance>>;
}

/// Errors returned by board repository implementations.
#[derive(Debug, Clone, Error)]
pub enum BoardRepositoryError {
    /// A task with the same identifier already exists.
    #[error("duplicate task identifier: {0}")]
    DuplicateTask(TaskId),

    /// An instance with the same identifier already exists.
    #[error("duplicate instance identifier: {0}")]
    DuplicateInstance(TaskInstanceId),

    /// The task was not found.
    #[error("task not found: {0}")]
    TaskNotFound(TaskId),

    /// The instance was not found.
    #[error("instance not found: {0}")]
    InstanceNotFound(TaskInstanceId),

    /// The backend rejected the operation for authorization reasons.
    #[error("operation rejected by the backend: {0}")]
    Rejected(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl BoardRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
