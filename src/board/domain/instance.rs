//! Generated recurring-task instance aggregate.

use super::{Priority, RecurringTaskId, TaskInstanceId, TaskStatus};
use crate::directory::domain::ProfileId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// One concrete, dated occurrence spawned from a recurring template.
///
/// Instances live on the board next to standalone tasks and move through the
/// same columns. A completed instance is never deleted; it stays behind as
/// history while the next occurrence takes its place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskInstance {
    id: TaskInstanceId,
    recurring_task: RecurringTaskId,
    title: String,
    description: Option<String>,
    assignee: Option<ProfileId>,
    priority: Priority,
    due_date: NaiveDate,
    status: TaskStatus,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for creating a fresh instance from template data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewInstanceData {
    /// Owning template.
    pub recurring_task: RecurringTaskId,
    /// Title copied from the template.
    pub title: String,
    /// Description copied from the template, if any.
    pub description: Option<String>,
    /// Assignee copied from the template, if any.
    pub assignee: Option<ProfileId>,
    /// Priority copied from the template.
    pub priority: Priority,
    /// The day this occurrence is due.
    pub due_date: NaiveDate,
}

/// Parameter object for reconstructing a persisted instance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedInstanceData {
    /// Persisted instance identifier.
    pub id: TaskInstanceId,
    /// Persisted owning template.
    pub recurring_task: RecurringTaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted assignee, if any.
    pub assignee: Option<ProfileId>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted due day.
    pub due_date: NaiveDate,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl TaskInstance {
    /// Creates a fresh occurrence in the first column.
    #[must_use]
    pub fn generate(data: NewInstanceData, clock: &impl Clock) -> Self {
        let timestamp = clock.utc();
        Self {
            id: TaskInstanceId::new(),
            recurring_task: data.recurring_task,
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            priority: data.priority,
            due_date: data.due_date,
            status: TaskStatus::Todo,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        }
    }

    /// Reconstructs an instance from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedInstanceData) -> Self {
        Self {
            id: data.id,
            recurring_task: data.recurring_task,
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            priority: data.priority,
            due_date: data.due_date,
            status: data.status,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Spawns the next occurrence, copying this instance's card data.
    #[must_use]
    pub fn next_occurrence(&self, due_date: NaiveDate, clock: &impl Clock) -> Self {
        Self::generate(
            NewInstanceData {
                recurring_task: self.recurring_task,
                title: self.title.clone(),
                description: self.description.clone(),
                assignee: self.assignee,
                priority: self.priority,
                due_date,
            },
            clock,
        )
    }

    /// Returns the instance identifier.
    #[must_use]
    pub const fn id(&self) -> TaskInstanceId {
        self.id
    }

    /// Returns the owning template identifier.
    #[must_use]
    pub const fn recurring_task(&self) -> RecurringTaskId {
        self.recurring_task
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assignee reference, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<ProfileId> {
        self.assignee
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the day this occurrence is due.
    #[must_use]
    pub const fn due_date(&self) -> NaiveDate {
        self.due_date
    }

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the completion timestamp, if any.
    #[must_use]
    pub const fn completed_at(&self) -> Option<DateTime<Utc>> {
        self.completed_at
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the instance to the target column and returns the previous
    /// status, keeping the completion-timestamp invariant.
    pub fn set_status(&mut self, target: TaskStatus, clock: &impl Clock) -> TaskStatus {
        let previous = self.status;
        let now = clock.utc();
        self.status = target;
        self.completed_at = target.is_completed().then_some(now);
        self.updated_at = now;
        previous
    }
}
