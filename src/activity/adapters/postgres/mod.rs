//! `PostgreSQL` adapter implementations for the activity log.

pub mod models;
pub mod repository;
pub mod schema;

pub use repository::{ActivityPgPool, PostgresActivityLog};
