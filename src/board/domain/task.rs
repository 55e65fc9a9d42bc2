//! Standalone task aggregate.

use super::{BoardDomainError, Priority, TaskId, TaskStatus};
use crate::directory::domain::ProfileId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A standalone unit of work shown as a card on the board.
///
/// The completion timestamp is maintained exclusively by [`Task::set_status`],
/// which keeps the invariant `completed_at.is_some() ⟺ status == Completed`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    id: TaskId,
    title: String,
    description: Option<String>,
    status: TaskStatus,
    priority: Priority,
    assignee: Option<ProfileId>,
    due_at: Option<DateTime<Utc>>,
    category: Option<String>,
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted task aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedTaskData {
    /// Persisted task identifier.
    pub id: TaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted status.
    pub status: TaskStatus,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted assignee reference, if any.
    pub assignee: Option<ProfileId>,
    /// Persisted due timestamp, if any.
    pub due_at: Option<DateTime<Utc>>,
    /// Persisted project/category reference, if any.
    pub category: Option<String>,
    /// Persisted completion timestamp, if any.
    pub completed_at: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new task in the first column.
    ///
    /// # Errors
    ///
    /// Returns [`BoardDomainError::EmptyTitle`] when the title is empty after
    /// trimming.
    pub fn new(
        title: impl Into<String>,
        priority: Priority,
        clock: &impl Clock,
    ) -> Result<Self, BoardDomainError> {
        let raw: String = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(BoardDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: TaskId::new(),
            title: trimmed.to_owned(),
            description: None,
            status: TaskStatus::Todo,
            priority,
            assignee: None,
            due_at: None,
            category: None,
            completed_at: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a task from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            status: data.status,
            priority: data.priority,
            assignee: data.assignee,
            due_at: data.due_at,
            category: data.category,
            completed_at: data.completed_at,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Sets the free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assigns the task to a profile.
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

    /// Returns the task identifier.
    #[must_use]
    pub const fn id(&self) -> TaskId {
        self.id
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

    /// Returns the current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        self.status
    }

    /// Returns the priority.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the assignee reference, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<ProfileId> {
        self.assignee
    }

    /// Returns the due timestamp, if any.
    #[must_use]
    pub const fn due_at(&self) -> Option<DateTime<Utc>> {
        self.due_at
    }

    /// Returns the project/category reference, if any.
    #[must_use]
    pub fn category(&self) -> Option<&str> {
        self.category.as_deref()
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

    /// Moves the task to the target column and returns the previous status.
    ///
    /// Entering the completed column stamps `completed_at`; leaving it (or
    /// entering any other column) clears the stamp.
    pub fn set_status(&mut self, target: TaskStatus, clock: &impl Clock) -> TaskStatus {
        let previous = self.status;
        let now = clock.utc();
        self.status = target;
        self.completed_at = target.is_completed().then_some(now);
        self.updated_at = now;
        previous
    }
}
