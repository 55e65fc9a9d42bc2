//! Error types for activity log parsing.

use thiserror::Error;

/// Error returned while parsing action tags or entity kinds from persistence.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown activity value: {0}")]
pub struct ParseActivityActionError(pub String);
