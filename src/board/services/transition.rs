//! The status state machine behind every column drop.

use crate::activity::{
    domain::{ActivityAction, ActivityEntry},
    ports::{ActivityRecorder, record_best_effort},
};
use crate::board::{
    domain::{BoardItem, TaskStatus},
    ports::{BoardRepositoryError, TaskInstanceRepository, TaskRepository},
};
use crate::directory::domain::ProfileId;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Detail payload appended to the activity log for each applied transition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChangeDetails {
    /// Title of the moved card.
    pub task_title: String,
    /// Column the card left.
    pub old_status: TaskStatus,
    /// Column the card entered.
    pub new_status: TaskStatus,
}

/// Outcome of one transition request.
///
/// Failures never escape the state machine: repository errors are logged
/// here and collapsed into [`TransitionReport::Failed`] so callers can leave
/// displayed state untouched and show a notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionReport {
    /// The move was persisted.
    Applied {
        /// The card as persisted, with its new status and timestamps.
        item: BoardItem,
        /// The column the card came from.
        old_status: TaskStatus,
    },
    /// The card was already in the target column; nothing was written and
    /// nothing was logged.
    Skipped,
    /// A write failed; the card is unchanged remotely.
    Failed,
}

/// Moves cards between columns.
///
/// Any column may move to any other column directly; the board favours
/// flexibility over an enforced linear workflow, so the only guard is the
/// same-column no-op.
#[derive(Clone)]
pub struct StatusTransitionService<T, I, A, C>
where
    T: TaskRepository,
    I: TaskInstanceRepository,
    A: ActivityRecorder,
    C: Clock + Send + Sync,
{
    tasks: Arc<T>,
    instances: Arc<I>,
    activity: Arc<A>,
    clock: Arc<C>,
    actor: Option<ProfileId>,
}

impl<T, I, A, C> StatusTransitionService<T, I, A, C>
where
    T: TaskRepository,
    I: TaskInstanceRepository,
    A: ActivityRecorder,
    C: Clock + Send + Sync,
{
    /// Creates a new transition service with no actor attribution.
    #[must_use]
    pub const fn new(tasks: Arc<T>, instances: Arc<I>, activity: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            tasks,
            instances,
            activity,
            clock,
            actor: None,
        }
    }

    /// Attributes subsequent activity entries to the given profile.
    #[must_use]
    pub const fn with_actor(mut self, actor: ProfileId) -> Self {
        self.actor = Some(actor);
        self
    }

    /// Moves a card to the target column.
    ///
    /// Repeated drops onto the current column are idempotent: they perform
    /// zero writes and append zero activity entries.
    pub async fn transition(&self, item: &BoardItem, target: TaskStatus) -> TransitionReport {
        let old_status = item.status();
        if old_status == target {
            return TransitionReport::Skipped;
        }

        let moved = match self.apply(item, target).await {
            Ok(moved) => moved,
            Err(err) => {
                log::error!(
                    "could not move {} \"{}\" to {target}: {err}",
                    item.entity_kind(),
                    item.title(),
                );
                return TransitionReport::Failed;
            }
        };

        self.log_status_change(&moved, old_status, target).await;
        TransitionReport::Applied {
            item: moved,
            old_status,
        }
    }

    /// Writes the move to the collection matching the card's variant.
    async fn apply(
        &self,
        item: &BoardItem,
        target: TaskStatus,
    ) -> Result<BoardItem, BoardRepositoryError> {
        match item {
            BoardItem::Task(task) => {
                let mut moved = task.clone();
                moved.set_status(target, &*self.clock);
                self.tasks.update(&moved).await?;
                Ok(BoardItem::Task(moved))
            }
            BoardItem::Instance(instance) => {
                let mut moved = instance.clone();
                moved.set_status(target, &*self.clock);
                self.instances.update(&moved).await?;
                Ok(BoardItem::Instance(moved))
            }
        }
    }

    /// Appends the history record for an applied move. Best-effort.
    async fn log_status_change(&self, moved: &BoardItem, old: TaskStatus, new: TaskStatus) {
        let details = StatusChangeDetails {
            task_title: moved.title().to_owned(),
            old_status: old,
            new_status: new,
        };
        match serde_json::to_value(&details) {
            Ok(details) => {
                let entry = ActivityEntry::new(
                    ActivityAction::UpdateStatus,
                    moved.entity_kind(),
                    moved.entity_id(),
                    details,
                    self.actor,
                    &*self.clock,
                );
                record_best_effort(&*self.activity, entry).await;
            }
            Err(err) => {
                log::warn!("status-change details for {} not serialized: {err}", moved.entity_id());
            }
        }
    }
}
