//! Append-only activity log entries.

use super::ParseActivityActionError;
use crate::directory::domain::ProfileId;
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;
use uuid::Uuid;

/// Unique identifier for an activity entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ActivityEntryId(Uuid);

impl ActivityEntryId {
    /// Creates a new random entry identifier.
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an entry identifier from an existing UUID.
    #[must_use]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the wrapped UUID.
    #[must_use]
    pub const fn into_inner(self) -> Uuid {
        self.0
    }
}

impl Default for ActivityEntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ActivityEntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Action tag recorded with each entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityAction {
    /// A task or instance changed status.
    UpdateStatus,
    /// A completed recurring instance was regenerated.
    RegenerateTask,
    /// A standalone task was created.
    CreateTask,
    /// A recurring template was created.
    CreateRecurringTask,
}

impl ActivityAction {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::UpdateStatus => "update_status",
            Self::RegenerateTask => "regenerate_task",
            Self::CreateTask => "create_task",
            Self::CreateRecurringTask => "create_recurring_task",
        }
    }
}

impl fmt::Display for ActivityAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for ActivityAction {
    type Error = ParseActivityActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "update_status" => Ok(Self::UpdateStatus),
            "regenerate_task" => Ok(Self::RegenerateTask),
            "create_task" => Ok(Self::CreateTask),
            "create_recurring_task" => Ok(Self::CreateRecurringTask),
            _ => Err(ParseActivityActionError(value.to_owned())),
        }
    }
}

/// Kind of entity an entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// A standalone task.
    Task,
    /// A generated recurring-task instance.
    TaskInstance,
    /// A recurring template.
    RecurringTask,
}

impl EntityKind {
    /// Returns the canonical storage representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::TaskInstance => "task_instance",
            Self::RecurringTask => "recurring_task",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for EntityKind {
    type Error = ParseActivityActionError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "task" => Ok(Self::Task),
            "task_instance" => Ok(Self::TaskInstance),
            "recurring_task" => Ok(Self::RecurringTask),
            _ => Err(ParseActivityActionError(value.to_owned())),
        }
    }
}

/// One immutable history record. Entries are only ever appended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    id: ActivityEntryId,
    actor: Option<ProfileId>,
    action: ActivityAction,
    entity_kind: EntityKind,
    entity_id: String,
    details: Value,
    created_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted activity entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedActivityEntryData {
    /// Persisted entry identifier.
    pub id: ActivityEntryId,
    /// Persisted actor reference, if any.
    pub actor: Option<ProfileId>,
    /// Persisted action tag.
    pub action: ActivityAction,
    /// Persisted entity kind.
    pub entity_kind: EntityKind,
    /// Persisted entity identifier.
    pub entity_id: String,
    /// Persisted free-form detail payload.
    pub details: Value,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
}

impl ActivityEntry {
    /// Creates a new entry stamped with the current clock time.
    #[must_use]
    pub fn new(
        action: ActivityAction,
        entity_kind: EntityKind,
        entity_id: impl Into<String>,
        details: Value,
        actor: Option<ProfileId>,
        clock: &impl Clock,
    ) -> Self {
        Self {
            id: ActivityEntryId::new(),
            actor,
            action,
            entity_kind,
            entity_id: entity_id.into(),
            details,
            created_at: clock.utc(),
        }
    }

    /// Reconstructs an entry from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedActivityEntryData) -> Self {
        Self {
            id: data.id,
            actor: data.actor,
            action: data.action,
            entity_kind: data.entity_kind,
            entity_id: data.entity_id,
            details: data.details,
            created_at: data.created_at,
        }
    }

    /// Returns the entry identifier.
    #[must_use]
    pub const fn id(&self) -> ActivityEntryId {
        self.id
    }

    /// Returns the acting profile, if recorded.
    #[must_use]
    pub const fn actor(&self) -> Option<ProfileId> {
        self.actor
    }

    /// Returns the action tag.
    #[must_use]
    pub const fn action(&self) -> ActivityAction {
        self.action
    }

    /// Returns the kind of entity this entry refers to.
    #[must_use]
    pub const fn entity_kind(&self) -> EntityKind {
        self.entity_kind
    }

    /// Returns the referenced entity identifier.
    #[must_use]
    pub fn entity_id(&self) -> &str {
        &self.entity_id
    }

    /// Returns the free-form detail payload.
    #[must_use]
    pub const fn details(&self) -> &Value {
        &self.details
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
