//! `PostgreSQL` adapter implementations for the board context.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{BoardPgPool, PostgresTaskInstanceRepository, PostgresTaskRepository};
