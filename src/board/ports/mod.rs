//! Port contracts for the kanban board.
//!
//! Ports define infrastructure-agnostic interfaces used by board services.

pub mod notifier;
pub mod repository;

pub use notifier::BoardNotifier;
pub use repository::{
    BoardRepositoryError, BoardRepositoryResult, TaskInstanceRepository, TaskRepository,
};
