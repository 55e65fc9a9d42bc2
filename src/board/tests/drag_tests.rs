//! Tests for the drag-and-drop controller.

use std::sync::Arc;

use super::fixtures::{
    FailingInstanceRepository, FailingTaskRepository, RecordingNotifier, Toast, task_in,
};
use crate::activity::adapters::memory::InMemoryActivityLog;
use crate::board::{
    adapters::memory::{InMemoryTaskInstanceRepository, InMemoryTaskRepository},
    domain::{BoardItem, TaskStatus},
    ports::{BoardNotifier, TaskRepository},
    services::{DragController, DragEffect, DropEffect, DropOutcome, StatusTransitionService},
};
use mockable::DefaultClock;
use rstest::rstest;

mockall::mock! {
    Notifier {}

    impl BoardNotifier for Notifier {
        fn notify_success(&self, message: &str);
        fn notify_error(&self, message: &str);
    }
}

type MemoryDragController = DragController<
    InMemoryTaskRepository,
    InMemoryTaskInstanceRepository,
    InMemoryActivityLog,
    DefaultClock,
    RecordingNotifier,
>;

struct Harness {
    tasks: Arc<InMemoryTaskRepository>,
    notifier: Arc<RecordingNotifier>,
    controller: MemoryDragController,
}

fn harness() -> Harness {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let service = StatusTransitionService::new(
        Arc::clone(&tasks),
        Arc::new(InMemoryTaskInstanceRepository::new()),
        Arc::new(InMemoryActivityLog::new()),
        Arc::new(DefaultClock),
    );
    let controller = DragController::new(service, Arc::clone(&notifier));
    Harness {
        tasks,
        notifier,
        controller,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_a_dragged_card_moves_it_and_confirms() {
    let mut h = harness();
    let task = task_in(TaskStatus::Todo);
    h.tasks.store(&task).await.expect("store should succeed");

    assert_eq!(h.controller.drag_start(BoardItem::Task(task.clone())), DragEffect::Move);
    assert_eq!(h.controller.drag_over(), DropEffect::Move);
    let outcome = h.controller.drop_on(TaskStatus::InProgress).await;

    let DropOutcome::Moved(moved) = outcome else {
        panic!("expected Moved, got {outcome:?}");
    };
    assert_eq!(moved.status(), TaskStatus::InProgress);
    assert!(h.controller.dragged().is_none());

    let toasts = h.notifier.recorded();
    assert_eq!(
        toasts,
        vec![(
            Toast::Success,
            format!("Tarefa \"{}\" movida para Em Progresso", task.title()),
        )]
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_with_nothing_dragged_is_ignored() {
    let mut h = harness();

    let outcome = h.controller.drop_on(TaskStatus::Review).await;

    assert_eq!(outcome, DropOutcome::Ignored);
    assert!(h.controller.dragged().is_none());
    assert!(h.notifier.recorded().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_onto_the_current_column_is_ignored_and_clears_the_slot() {
    let mut h = harness();
    let task = task_in(TaskStatus::Review);
    h.tasks.store(&task).await.expect("store should succeed");

    h.controller.drag_start(BoardItem::Task(task));
    let outcome = h.controller.drop_on(TaskStatus::Review).await;

    assert_eq!(outcome, DropOutcome::Ignored);
    assert!(h.controller.dragged().is_none());
    assert!(h.notifier.recorded().is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failed_moves_notify_with_destructive_styling_and_clear_the_slot() {
    let notifier = Arc::new(RecordingNotifier::new());
    let service = StatusTransitionService::new(
        Arc::new(FailingTaskRepository),
        Arc::new(FailingInstanceRepository),
        Arc::new(InMemoryActivityLog::new()),
        Arc::new(DefaultClock),
    );
    let mut controller = DragController::new(service, Arc::clone(&notifier));
    let task = task_in(TaskStatus::Todo);

    controller.drag_start(BoardItem::Task(task));
    let outcome = controller.drop_on(TaskStatus::Completed).await;

    assert_eq!(outcome, DropOutcome::Failed);
    assert!(controller.dragged().is_none());

    let toasts = notifier.recorded();
    assert_eq!(toasts.len(), 1);
    let (styling, message) = toasts.first().expect("one toast");
    assert_eq!(*styling, Toast::Error);
    assert!(message.contains("Não foi possível mover"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_new_drag_replaces_the_previous_slot() {
    let mut h = harness();
    let first = task_in(TaskStatus::Todo);
    let second = task_in(TaskStatus::Review);
    h.tasks.store(&first).await.expect("store should succeed");
    h.tasks.store(&second).await.expect("store should succeed");

    h.controller.drag_start(BoardItem::Task(first));
    h.controller.drag_start(BoardItem::Task(second.clone()));

    assert_eq!(
        h.controller.dragged(),
        Some(&BoardItem::Task(second))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn failure_notifications_reach_a_mocked_notifier() {
    let mut mock = MockNotifier::new();
    mock.expect_notify_error().times(1).return_const(());
    mock.expect_notify_success().times(0);

    let service = StatusTransitionService::new(
        Arc::new(FailingTaskRepository),
        Arc::new(FailingInstanceRepository),
        Arc::new(InMemoryActivityLog::new()),
        Arc::new(DefaultClock),
    );
    let mut controller = DragController::new(service, Arc::new(mock));

    controller.drag_start(BoardItem::Task(task_in(TaskStatus::Todo)));
    let outcome = controller.drop_on(TaskStatus::InProgress).await;

    assert_eq!(outcome, DropOutcome::Failed);
    assert!(controller.dragged().is_none());
}
