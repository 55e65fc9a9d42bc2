//! Error types for recurrence domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing recurrence domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecurrenceDomainError {
    /// The template title is empty after trimming.
    #[error("template title must not be empty")]
    EmptyTitle,

    /// A custom cadence was given no days to run on.
    #[error("custom cadence requires at least one weekday")]
    EmptyCustomDays,

    /// A weekday index outside 0..=6 was given.
    #[error("invalid weekday index {0}, expected 0..=6")]
    InvalidWeekday(u8),

    /// A month index outside 1..=12 was given.
    #[error("invalid month index {0}, expected 1..=12")]
    InvalidMonth(u8),
}
