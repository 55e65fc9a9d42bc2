//! Domain model for recurring templates.
//!
//! Templates describe repeating obligations; the instances they spawn live
//! in the board domain and move through the same columns as standalone
//! tasks.

mod cadence;
mod error;
mod template;

pub use cadence::{Cadence, MonthIndex, WeekdayIndex};
pub use error::RecurrenceDomainError;
pub use template::{PersistedRecurringTaskData, RecurringTask};
