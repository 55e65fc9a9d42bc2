//! Diesel row models for directory persistence.

use super::schema::{departamentos, profiles};
use chrono::{DateTime, Utc};
use diesel::prelude::*;

/// Query result row for department records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = departamentos)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DepartmentRow {
    /// Department identifier.
    pub id: uuid::Uuid,
    /// Department name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional display colour.
    pub color: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for department records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = departamentos)]
pub struct NewDepartmentRow {
    /// Department identifier.
    pub id: uuid::Uuid,
    /// Department name.
    pub name: String,
    /// Optional description.
    pub description: Option<String>,
    /// Optional display colour.
    pub color: Option<String>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Query result row for profile records.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = profiles)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ProfileRow {
    /// Profile identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub display_name: String,
    /// Optional department reference.
    pub department_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}

/// Insert model for profile records.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = profiles)]
pub struct NewProfileRow {
    /// Profile identifier.
    pub id: uuid::Uuid,
    /// Display name.
    pub display_name: String,
    /// Optional department reference.
    pub department_id: Option<uuid::Uuid>,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last update timestamp.
    pub updated_at: DateTime<Utc>,
}
