//! The daily regeneration sweep.

use crate::activity::{
    domain::{ActivityAction, ActivityEntry, EntityKind},
    ports::{ActivityRecorder, record_best_effort},
};
use crate::board::{
    domain::{RecurringTaskId, TaskInstance, TaskInstanceId, TaskStatus},
    ports::{BoardRepositoryError, TaskInstanceRepository},
};
use crate::recurrence::ports::{RecurringTaskRepository, RecurringTaskRepositoryError};
use chrono::{DateTime, Local};
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Detail payload appended to the activity log for each regeneration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegenerationDetails {
    /// Title of the regenerated card.
    pub task_title: String,
    /// The completed instance the new one was spawned from.
    pub predecessor: TaskInstanceId,
}

/// Tally of one sweep.
///
/// A sweep always runs to completion; failures are counted, never fatal. A
/// missed run has no data-loss consequence because the next sweep sees the
/// same completed instances again.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Completed instances inspected.
    pub examined: usize,
    /// Fresh instances spawned.
    pub regenerated: usize,
    /// Instances whose series had ended.
    pub ended: usize,
    /// Instances already regenerated by an earlier sweep.
    pub already_current: usize,
    /// Instances that could not be processed.
    pub failures: usize,
}

impl SweepReport {
    /// Returns `true` when every inspected instance was processed.
    #[must_use]
    pub const fn is_clean(&self) -> bool {
        self.failures == 0
    }
}

/// What happened to one inspected instance.
enum RegenerationDecision {
    Regenerated,
    SeriesEnded,
    AlreadyCurrent,
}

/// Errors raised while processing a single instance.
#[derive(Debug, Error)]
enum RegenerationError {
    /// The owning template has disappeared.
    #[error("owning template {0} not found")]
    TemplateMissing(RecurringTaskId),

    /// Template lookup or update failed.
    #[error(transparent)]
    Template(#[from] RecurringTaskRepositoryError),

    /// Instance persistence failed.
    #[error(transparent)]
    Instances(#[from] BoardRepositoryError),
}

/// Regenerates completed instances of still-active templates.
#[derive(Clone)]
pub struct Regenerator<R, I, A, C>
where
    R: RecurringTaskRepository,
    I: TaskInstanceRepository,
    A: ActivityRecorder,
    C: Clock + Send + Sync,
{
    templates: Arc<R>,
    instances: Arc<I>,
    activity: Arc<A>,
    clock: Arc<C>,
}

impl<R, I, A, C> Regenerator<R, I, A, C>
where
    R: RecurringTaskRepository,
    I: TaskInstanceRepository,
    A: ActivityRecorder,
    C: Clock + Send + Sync,
{
    /// Creates a new regenerator.
    #[must_use]
    pub const fn new(templates: Arc<R>, instances: Arc<I>, activity: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            templates,
            instances,
            activity,
            clock,
        }
    }

    /// Returns the current local time, for scheduling the next sweep.
    #[must_use]
    pub fn local_now(&self) -> DateTime<Local> {
        self.clock.local()
    }

    /// Runs one regeneration pass over every completed instance.
    ///
    /// Per-instance failures are logged and counted; they never abort the
    /// pass for the remaining instances.
    pub async fn sweep(&self) -> SweepReport {
        let mut report = SweepReport::default();

        let completed = match self.instances.list_by_status(TaskStatus::Completed).await {
            Ok(completed) => completed,
            Err(err) => {
                log::error!("regeneration sweep could not list completed instances: {err}");
                report.failures = 1;
                return report;
            }
        };

        for instance in completed {
            report.examined += 1;
            match self.regenerate(&instance).await {
                Ok(RegenerationDecision::Regenerated) => report.regenerated += 1,
                Ok(RegenerationDecision::SeriesEnded) => report.ended += 1,
                Ok(RegenerationDecision::AlreadyCurrent) => report.already_current += 1,
                Err(err) => {
                    log::warn!("regeneration failed for instance {}: {err}", instance.id());
                    report.failures += 1;
                }
            }
        }

        log::info!(
            "regeneration sweep: {} examined, {} regenerated, {} ended, {} current, {} failed",
            report.examined,
            report.regenerated,
            report.ended,
            report.already_current,
            report.failures,
        );
        report
    }

    /// Processes one completed instance.
    async fn regenerate(
        &self,
        instance: &TaskInstance,
    ) -> Result<RegenerationDecision, RegenerationError> {
        let template = self
            .templates
            .find_by_id(instance.recurring_task())
            .await?
            .ok_or(RegenerationError::TemplateMissing(instance.recurring_task()))?;

        let now = self.clock.utc();
        if template.series_ended(now.date_naive()) {
            return Ok(RegenerationDecision::SeriesEnded);
        }

        // One completion spawns exactly one successor: once the template has
        // generated at or after this instance's completion, the sweep has
        // nothing left to do for it.
        let completed_at = instance.completed_at();
        if let (Some(last), Some(done_at)) = (template.last_generated(), completed_at) {
            if last >= done_at {
                return Ok(RegenerationDecision::AlreadyCurrent);
            }
        }

        let next = instance.next_occurrence(now.date_naive(), &*self.clock);
        self.instances.store(&next).await?;

        let mut refreshed = template;
        refreshed.mark_generated(&*self.clock);
        self.templates.update(&refreshed).await?;

        self.log_regenerated(&next, instance.id()).await;
        Ok(RegenerationDecision::Regenerated)
    }

    /// Appends the history record for a spawned instance. Best-effort.
    async fn log_regenerated(&self, next: &TaskInstance, predecessor: TaskInstanceId) {
        let details = RegenerationDetails {
            task_title: next.title().to_owned(),
            predecessor,
        };
        match serde_json::to_value(&details) {
            Ok(details) => {
                let entry = ActivityEntry::new(
                    ActivityAction::RegenerateTask,
                    EntityKind::TaskInstance,
                    next.id().to_string(),
                    details,
                    None,
                    &*self.clock,
                );
                record_best_effort(&*self.activity, entry).await;
            }
            Err(err) => {
                log::warn!("regeneration details for {} not serialized: {err}", next.id());
            }
        }
    }
}
