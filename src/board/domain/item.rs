//! The card sum type dispatched by the status state machine.

use super::{Task, TaskInstance, TaskStatus};
use crate::activity::domain::EntityKind;

/// A draggable card: either a standalone task or a recurring instance.
///
/// The two kinds persist to different collections; carrying the distinction
/// as a variant (rather than a flag beside the card) makes every dispatch
/// site an exhaustiveness-checked `match`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardItem {
    /// A standalone task.
    Task(Task),
    /// A generated recurring-task instance.
    Instance(TaskInstance),
}

impl BoardItem {
    /// Returns the card's current status.
    #[must_use]
    pub const fn status(&self) -> TaskStatus {
        match self {
            Self::Task(task) => task.status(),
            Self::Instance(instance) => instance.status(),
        }
    }

    /// Returns the card's title.
    #[must_use]
    pub fn title(&self) -> &str {
        match self {
            Self::Task(task) => task.title(),
            Self::Instance(instance) => instance.title(),
        }
    }

    /// Returns the activity-log entity kind for this card.
    #[must_use]
    pub const fn entity_kind(&self) -> EntityKind {
        match self {
            Self::Task(_) => EntityKind::Task,
            Self::Instance(_) => EntityKind::TaskInstance,
        }
    }

    /// Returns the card's identifier rendered for the activity log.
    #[must_use]
    pub fn entity_id(&self) -> String {
        match self {
            Self::Task(task) => task.id().to_string(),
            Self::Instance(instance) => instance.id().to_string(),
        }
    }
}

impl From<Task> for BoardItem {
    fn from(task: Task) -> Self {
        Self::Task(task)
    }
}

impl From<TaskInstance> for BoardItem {
    fn from(instance: TaskInstance) -> Self {
        Self::Instance(instance)
    }
}
