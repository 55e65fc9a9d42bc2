//! Error types for board domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing board domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BoardDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,
}

/// Error returned while strictly parsing statuses from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown task status: {0}")]
pub struct ParseTaskStatusError(pub String);

/// Error returned while parsing priorities from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown priority: {0}")]
pub struct ParsePriorityError(pub String);
