//! Drag-and-drop controller for one board view.

use super::transition::{StatusTransitionService, TransitionReport};
use crate::activity::ports::ActivityRecorder;
use crate::board::{
    domain::{BoardItem, TaskStatus},
    ports::{BoardNotifier, TaskInstanceRepository, TaskRepository},
};
use mockable::Clock;
use std::sync::Arc;

/// Transfer-effect hint returned when a drag starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragEffect {
    /// The card is moved, not copied.
    Move,
}

/// Drop-effect hint returned while a card hovers over a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropEffect {
    /// Accept the drop as a move.
    Move,
}

/// Outcome of one drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The card moved; the view may apply the returned card optimistically.
    Moved(BoardItem),
    /// Nothing was dragged, or the card was dropped onto its own column.
    Ignored,
    /// The move failed; displayed state must stay as it was.
    Failed,
}

/// Failure toast shown when a move cannot be persisted.
const MOVE_FAILURE_NOTICE: &str = "Não foi possível mover a tarefa. Tente novamente.";

/// Session-scoped drag state plus the glue from drop gestures to the state
/// machine.
///
/// One controller is owned by one board view and shared by all of its
/// columns, so exactly one drag can be in flight at a time. The dragged slot
/// is vacated on every drop path, success or not, which is what prevents a
/// stale card from leaking into the next gesture.
pub struct DragController<T, I, A, C, N>
where
    T: TaskRepository,
    I: TaskInstanceRepository,
    A: ActivityRecorder,
    C: Clock + Send + Sync,
    N: BoardNotifier,
{
    transitions: StatusTransitionService<T, I, A, C>,
    notifier: Arc<N>,
    dragged: Option<BoardItem>,
}

impl<T, I, A, C, N> DragController<T, I, A, C, N>
where
    T: TaskRepository,
    I: TaskInstanceRepository,
    A: ActivityRecorder,
    C: Clock + Send + Sync,
    N: BoardNotifier,
{
    /// Creates a controller for one board view.
    #[must_use]
    pub const fn new(transitions: StatusTransitionService<T, I, A, C>, notifier: Arc<N>) -> Self {
        Self {
            transitions,
            notifier,
            dragged: None,
        }
    }

    /// Records the card a drag gesture picked up.
    pub fn drag_start(&mut self, item: BoardItem) -> DragEffect {
        self.dragged = Some(item);
        DragEffect::Move
    }

    /// Advisory hover hint; accepting the hover is what allows the drop.
    #[must_use]
    pub const fn drag_over(&self) -> DropEffect {
        DropEffect::Move
    }

    /// Returns the card currently in flight, if any.
    #[must_use]
    pub const fn dragged(&self) -> Option<&BoardItem> {
        self.dragged.as_ref()
    }

    /// Handles a drop onto the given column.
    ///
    /// Taking the dragged card out of the slot up front is what guarantees
    /// the cleanup contract on every path, including early returns.
    pub async fn drop_on(&mut self, target: TaskStatus) -> DropOutcome {
        let Some(item) = self.dragged.take() else {
            return DropOutcome::Ignored;
        };
        if item.status() == target {
            return DropOutcome::Ignored;
        }

        match self.transitions.transition(&item, target).await {
            TransitionReport::Applied { item: moved, .. } => {
                self.notifier
                    .notify_success(&move_confirmation(moved.title(), target));
                DropOutcome::Moved(moved)
            }
            TransitionReport::Skipped => DropOutcome::Ignored,
            TransitionReport::Failed => {
                self.notifier.notify_error(MOVE_FAILURE_NOTICE);
                DropOutcome::Failed
            }
        }
    }
}

/// Builds the localized confirmation toast for a successful move.
fn move_confirmation(title: &str, target: TaskStatus) -> String {
    format!("Tarefa \"{title}\" movida para {}", target.label())
}
