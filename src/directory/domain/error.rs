//! Error types for directory domain validation.

use thiserror::Error;

/// Errors returned while constructing directory domain values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DirectoryDomainError {
    /// The department name is empty after trimming.
    #[error("department name must not be empty")]
    EmptyDepartmentName,

    /// The profile display name is empty after trimming.
    #[error("profile display name must not be empty")]
    EmptyDisplayName,
}
