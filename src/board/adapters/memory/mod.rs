//! In-memory adapter implementations for the board context.

mod board;

pub use board::{InMemoryTaskInstanceRepository, InMemoryTaskRepository};
