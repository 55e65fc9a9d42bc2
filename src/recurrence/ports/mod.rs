//! Port contracts for the recurrence context.

pub mod repository;

pub use repository::{
    RecurringTaskRepository, RecurringTaskRepositoryError, RecurringTaskRepositoryResult,
};
