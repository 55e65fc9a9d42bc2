//! `PostgreSQL` adapter implementations for the recurrence context.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{PostgresRecurringTaskRepository, RecurrencePgPool};
