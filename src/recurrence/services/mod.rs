//! Orchestration services for the recurrence context.

pub mod lifecycle;
pub mod regenerator;
pub mod scheduler;

pub use lifecycle::{
    CreateRecurringTaskRequest, RecurrenceLifecycleError, RecurrenceLifecycleResult,
    RecurrenceService, RecurringTaskCreatedDetails,
};
pub use regenerator::{RegenerationDetails, Regenerator, SweepReport};
pub use scheduler::{SweepScheduler, SweepSchedulerHandle, delay_until_next_midnight};
