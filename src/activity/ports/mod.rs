//! Port contracts for the activity log.

pub mod recorder;

pub use recorder::{
    ActivityRecorder, ActivityRecorderError, ActivityRecorderResult, record_best_effort,
};
