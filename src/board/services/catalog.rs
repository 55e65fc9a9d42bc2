//! Service layer for creating, listing, and removing standalone tasks.

use crate::activity::{
    domain::{ActivityAction, ActivityEntry, EntityKind},
    ports::{ActivityRecorder, record_best_effort},
};
use crate::board::{
    domain::{BoardDomainError, Priority, Task, TaskId, TaskStatus},
    ports::{BoardRepositoryError, TaskRepository},
};
use crate::directory::domain::ProfileId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a standalone task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTaskRequest {
    title: String,
    description: Option<String>,
    priority: Priority,
    assignee: Option<ProfileId>,
    due_at: Option<DateTime<Utc>>,
    category: Option<String>,
}

impl CreateTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(title: impl Into<String>, priority: Priority) -> Self {
        Self {
            title: title.into(),
            description: None,
            priority,
            assignee: None,
            due_at: None,
            category: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: ProfileId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the due timestamp.
    #[must_use]
    pub const fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Sets the project/category reference.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }
}

/// Detail payload appended to the activity log when a task is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskCreatedDetails {
    /// Title of the created task.
    pub task_title: String,
}

/// Service-level errors for task catalog operations.
#[derive(Debug, Error)]
pub enum TaskCatalogError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] BoardDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] BoardRepositoryError),
}

/// Result type for task catalog operations.
pub type TaskCatalogResult<T> = Result<T, TaskCatalogError>;

/// Standalone task CRUD orchestration.
#[derive(Clone)]
pub struct TaskService<T, A, C>
where
    T: TaskRepository,
    A: ActivityRecorder,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    activity: Arc<A>,
    clock: Arc<C>,
    actor: Option<ProfileId>,
}

impl<T, A, C> TaskService<T, A, C>
where
    T: TaskRepository,
    A: ActivityRecorder,
    C: Clock + Send + Sync,
{
    /// Creates a new task service with no actor attribution.
    #[must_use]
    pub const fn new(tasks: Arc<T>, activity: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            activity,
            clock,
            actor: None,
        }
    }

    /// Attributes subsequent activity entries to the given profile.
    #[must_use]
    pub const fn with_actor(mut self, actor: ProfileId) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Creates and stores a task in the first column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError`] when validation fails or the repository
    /// rejects persistence.
    pub async fn create(&self, request: CreateTaskRequest) -> TaskCatalogResult<Task> {
        let mut task = Task::new(request.title, request.priority, &*self.clock)?;
        if let Some(description) = request.description {
            task = task.with_description(description);
        }
        if let Some(assignee) = request.assignee {
            task = task.with_assignee(assignee);
        }
        if let Some(due_at) = request.due_at {
            task = task.with_due_at(due_at);
        }
        if let Some(category) = request.category {
            task = task.with_category(category);
        }
        self.tasks.store(&task).await?;
        self.log_created(&task).await;
        Ok(task)
    }

    /// Returns the tasks in one board column.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::Repository`] when the lookup fails.
    pub async fn column(&self, status: TaskStatus) -> TaskCatalogResult<Vec<Task>> {
        Ok(self.tasks.list_by_status(status).await?)
    }

    /// Returns every task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::Repository`] when the lookup fails.
    pub async fn list_all(&self) -> TaskCatalogResult<Vec<Task>> {
        Ok(self.tasks.list_all().await?)
    }

    /// Removes a task.
    ///
    /// # Errors
    ///
    /// Returns [`TaskCatalogError::Repository`] when the task is missing or
    /// the delete fails.
    pub async fn delete(&self, id: TaskId) -> TaskCatalogResult<()> {
        Ok(self.tasks.delete(id).await?)
    }

    async fn log_created(&self, task: &Task) {
        let details = TaskCreatedDetails {
            task_title: task.title().to_owned(),
        };
        match serde_json::to_value(&details) {
            Ok(details) => {
                let entry = ActivityEntry::new(
                    ActivityAction::CreateTask,
                    EntityKind::Task,
                    task.id().to_string(),
                    details,
                    self.actor,
                    &*self.clock,
                );
                record_best_effort(&*self.activity, entry).await;
            }
            Err(err) => {
                log::warn!("task-created details for {} not serialized: {err}", task.id());
            }
        }
    }
}
