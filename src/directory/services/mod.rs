//! Orchestration services for the directory context.

pub mod registry;

pub use registry::{DirectoryService, DirectoryServiceError, DirectoryServiceResult};
