//! Diesel row models for activity log persistence.

use super::schema::activity_entries;
use chrono::{DateTime, Utc};
use diesel::prelude::*;
use serde_json::Value;

/// Query result row for activity entries.
#[derive(Debug, Clone, Queryable, Selectable)]
#[diesel(table_name = activity_entries)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct ActivityEntryRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Optional acting profile.
    pub actor_id: Option<uuid::Uuid>,
    /// Action tag.
    pub action: String,
    /// Kind of entity referred to.
    pub entity_kind: String,
    /// Identifier of the referred entity.
    pub entity_id: String,
    /// Free-form detail payload.
    pub details: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// Insert model for activity entries.
#[derive(Debug, Clone, Insertable)]
#[diesel(table_name = activity_entries)]
pub struct NewActivityEntryRow {
    /// Entry identifier.
    pub id: uuid::Uuid,
    /// Optional acting profile.
    pub actor_id: Option<uuid::Uuid>,
    /// Action tag.
    pub action: String,
    /// Kind of entity referred to.
    pub entity_kind: String,
    /// Identifier of the referred entity.
    pub entity_id: String,
    /// Free-form detail payload.
    pub details: Value,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
