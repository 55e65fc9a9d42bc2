//! Kanban status vocabulary.

use super::ParseTaskStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Column a board item currently sits in.
///
/// The four values are wire-stable across the whole system. Any status may
/// move to any other status directly; the board deliberately favours
/// flexibility over an enforced linear workflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TaskStatus {
    /// Not started.
    Todo,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    Review,
    /// Finished.
    Completed,
}

impl TaskStatus {
    /// All statuses, in board column order.
    pub const ALL: [Self; 4] = [Self::Todo, Self::InProgress, Self::Review, Self::Completed];

    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Todo => "todo",
            Self::InProgress => "in-progress",
            Self::Review => "review",
            Self::Completed => "completed",
        }
    }

    /// Returns the localized column label shown to users.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Todo => "A Fazer",
            Self::InProgress => "Em Progresso",
            Self::Review => "Em Revisão",
            Self::Completed => "Concluído",
        }
    }

    /// Returns `true` for the completed column.
    #[must_use]
    pub const fn is_completed(self) -> bool {
        matches!(self, Self::Completed)
    }

    /// Parses a stored value, coercing anything unknown to [`Self::Todo`].
    ///
    /// Stored garbage must degrade the view, never break it, so unknown
    /// values land in the first column with a logged warning.
    #[must_use]
    pub fn from_stored(value: &str) -> Self {
        Self::try_from(value).unwrap_or_else(|err| {
            log::warn!("coercing unknown stored status to todo: {err}");
            Self::Todo
        })
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskStatusError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "todo" => Ok(Self::Todo),
            "in-progress" => Ok(Self::InProgress),
            "review" => Ok(Self::Review),
            "completed" => Ok(Self::Completed),
            _ => Err(ParseTaskStatusError(value.to_owned())),
        }
    }
}
