//! Change-notification vocabulary.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A watched record collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Collection {
    /// Standalone tasks.
    Tasks,
    /// Generated recurring-task instances.
    TaskInstances,
    /// Recurring templates.
    RecurringTasks,
    /// Activity history.
    ActivityEntries,
    /// Member profiles.
    Profiles,
    /// Departments.
    Departamentos,
}

impl Collection {
    /// Every collection the hub carries a channel for.
    pub const ALL: [Self; 6] = [
        Self::Tasks,
        Self::TaskInstances,
        Self::RecurringTasks,
        Self::ActivityEntries,
        Self::Profiles,
        Self::Departamentos,
    ];

    /// Returns the canonical collection name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tasks => "tasks",
            Self::TaskInstances => "task_instances",
            Self::RecurringTasks => "recurring_tasks",
            Self::ActivityEntries => "activity_entries",
            Self::Profiles => "profiles",
            Self::Departamentos => "departamentos",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happened to a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChangeKind {
    /// A record was inserted.
    Insert,
    /// A record was updated.
    Update,
    /// A record was deleted.
    Delete,
}

/// One change notification.
///
/// Subscribers never apply the event as a delta; every notification means
/// "go re-fetch the derived view", so the payload stays minimal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    /// Collection the change happened in.
    pub collection: Collection,
    /// What happened.
    pub kind: ChangeKind,
    /// Identifier of the affected record.
    pub entity_id: String,
}

impl ChangeEvent {
    /// Creates a change event.
    #[must_use]
    pub fn new(collection: Collection, kind: ChangeKind, entity_id: impl Into<String>) -> Self {
        Self {
            collection,
            kind,
            entity_id: entity_id.into(),
        }
    }
}
