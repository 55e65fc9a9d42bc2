//! Diesel row models for recurring-template persistence.

use super::schema::recurring_tasks;
use chrono::{DateTime, NaiveDate, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for template records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = recurring_tasks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct RecurringTaskRow {
    /// Template identifier.
    pub id: uuid::Uuid,
    /// Template title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional assignee reference.
    pub assignee_id: Option<uuid::Uuid>,
    /// Priority spawned instances carry.
    pub priority: String,
    /// Cadence JSON payload.
    pub cadence: Value,
    /// Day the series starts.
    pub start_date: NaiveDate,
    /// Optional day the series stops spawning.
    pub end_date: Option<NaiveDate>,
    /// When the series last spawned an instance.
    pub last_generated: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for template records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = recurring_tasks)]
pub struct NewRecurringTaskRow {
    /// Template identifier.
    pub id: uuid::Uuid,
    /// Template title.
    pub title: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional assignee reference.
    pub assignee_id: Option<uuid::Uuid>,
    /// Priority spawned instances carry.
    pub priority: String,
    /// Cadence JSON payload.
    pub cadence: Value,
    /// Day the series starts.
    pub start_date: NaiveDate,
    /// Optional day the series stops spawning.
    pub end_date: Option<NaiveDate>,
    /// When the series last spawned an instance.
    pub last_generated: Option<DateTime<Utc>>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
