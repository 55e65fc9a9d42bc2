//! `PostgreSQL` adapter implementations for the directory context.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{DirectoryPgPool, PostgresDirectory};
