//! In-memory adapter implementations for the recurrence context.

mod templates;

pub use templates::InMemoryRecurringTaskRepository;
