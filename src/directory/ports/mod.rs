//! Port contracts for the member directory.
//!
//! Ports define infrastructure-agnostic interfaces used by directory
//! services.

pub mod repository;

pub use repository::{DirectoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult};
