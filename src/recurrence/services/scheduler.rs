//! Midnight-aligned scheduling for the regeneration sweep.

use super::regenerator::Regenerator;
use crate::activity::ports::ActivityRecorder;
use crate::board::ports::TaskInstanceRepository;
use crate::recurrence::ports::RecurringTaskRepository;
use chrono::{DateTime, Local, TimeZone};
use mockable::Clock;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;

/// Fallback delay when the next local midnight cannot be resolved (end of
/// the calendar, a DST gap right at midnight).
const FULL_DAY: Duration = Duration::from_secs(24 * 60 * 60);

/// Returns how long to sleep from `now` until the next local midnight.
#[must_use]
pub fn delay_until_next_midnight(now: DateTime<Local>) -> Duration {
    let Some(tomorrow) = now.date_naive().succ_opt() else {
        return FULL_DAY;
    };
    let Some(midnight) = tomorrow.and_hms_opt(0, 0, 0) else {
        return FULL_DAY;
    };
    let Some(next) = Local.from_local_datetime(&midnight).earliest() else {
        return FULL_DAY;
    };
    (next - now).to_std().unwrap_or(FULL_DAY)
}

/// Spawns the background task that keeps the sweep running.
pub struct SweepScheduler;

impl SweepScheduler {
    /// Runs one sweep immediately, then re-arms for every local midnight.
    ///
    /// The returned handle owns the timer task; dropping it (or calling
    /// [`SweepSchedulerHandle::shutdown`]) cancels any pending timer, so a
    /// torn-down view never leaks a sweep into the next mount.
    #[must_use]
    pub fn spawn<R, I, A, C>(regenerator: Arc<Regenerator<R, I, A, C>>) -> SweepSchedulerHandle
    where
        R: RecurringTaskRepository + 'static,
        I: TaskInstanceRepository + 'static,
        A: ActivityRecorder + 'static,
        C: Clock + Send + Sync + 'static,
    {
        let task = tokio::spawn(async move {
            // Catch-up pass: anything a missed midnight left behind.
            let startup = regenerator.sweep().await;
            if !startup.is_clean() {
                log::warn!("startup sweep finished with {} failure(s)", startup.failures);
            }

            loop {
                let delay = delay_until_next_midnight(regenerator.local_now());
                log::debug!("next regeneration sweep in {}s", delay.as_secs());
                tokio::time::sleep(delay).await;
                let report = regenerator.sweep().await;
                if !report.is_clean() {
                    log::warn!("midnight sweep finished with {} failure(s)", report.failures);
                }
            }
        });
        SweepSchedulerHandle { task }
    }
}

/// Cancelable handle over the scheduled sweep task.
pub struct SweepSchedulerHandle {
    task: JoinHandle<()>,
}

impl SweepSchedulerHandle {
    /// Returns `true` while the timer task is still running.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.task.is_finished()
    }

    /// Cancels the timer task. Equivalent to dropping the handle.
    pub fn shutdown(self) {
        // Drop runs the abort.
    }
}

impl Drop for SweepSchedulerHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}
