//! Diesel row models for board card persistence.

use super::schema::{task_instances, tasks};
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;

/// Query result row for task records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Card title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Board column.
    pub status: String,
    /// Priority badge.
    pub priority: String,
    /// Optional assignee reference.
    pub assignee_id: Option<uuid::Uuid>,
    /// Optional due timestamp.
    pub due_at: Option<DateTime<Utc>>,
    /// Optional project/category reference.
    pub category: Option<String>,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for task records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = tasks)]
pub struct NewTaskRow {
    /// Task identifier.
    pub id: uuid::Uuid,
    /// Card title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Board column.
    pub status: String,
    /// Priority badge.
    pub priority: String,
    /// Optional assignee reference.
    pub assignee_id: Option<uuid::Uuid>,
    /// Optional due timestamp.
    pub due_at: Option<DateTime<Utc>>,
    /// Optional project/category reference.
    pub category: Option<String>,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for instance records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = task_instances)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TaskInstanceRow {
    /// Instance identifier.
    pub id: uuid::Uuid,
    /// Owning template reference.
    pub recurring_task_id: uuid::Uuid,
    /// Card title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional assignee reference.
    pub assignee_id: Option<uuid::Uuid>,
    /// Priority badge.
    pub priority: String,
    /// Day this occurrence is due.
    pub due_date: NaiveDate,
    /// Board column.
    pub status: String,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for instance records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = task_instances)]
pub struct NewTaskInstanceRow {
    /// Instance identifier.
    pub id: uuid::Uuid,
    /// Owning template reference.
    pub recurring_task_id: uuid::Uuid,
    /// Card title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional assignee reference.
    pub assignee_id: Option<uuid::Uuid>,
    /// Priority badge.
    pub priority: String,
    /// Day this occurrence is due.
    pub due_date: NaiveDate,
    /// Board column.
    pub status: String,
    /// Completion timestamp, if completed.
    pub completed_at: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
