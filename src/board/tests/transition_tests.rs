//! Tests for the status state machine.

use std::sync::Arc;

use super::fixtures::{
    FailingInstanceRepository, FailingTaskRepository, MemoryTransitionService, instance_in,
    task_in,
};
use crate::activity::adapters::memory::InMemoryActivityLog;
use crate::activity::domain::ActivityAction;
use crate::board::{
    adapters::memory::{InMemoryTaskInstanceRepository, InMemoryTaskRepository},
    domain::{BoardItem, TaskStatus},
    ports::{TaskInstanceRepository, TaskRepository},
    services::{StatusChangeDetails, StatusTransitionService, TransitionReport},
};
use mockable::DefaultClock;
use rstest::rstest;

struct Harness {
    tasks: Arc<InMemoryTaskRepository>,
    instances: Arc<InMemoryTaskInstanceRepository>,
    activity: Arc<InMemoryActivityLog>,
    service: MemoryTransitionService,
}

fn harness() -> Harness {
    let tasks = Arc::new(InMemoryTaskRepository::new());
    let instances = Arc::new(InMemoryTaskInstanceRepository::new());
    let activity = Arc::new(InMemoryActivityLog::new());
    let service = StatusTransitionService::new(
        Arc::clone(&tasks),
        Arc::clone(&instances),
        Arc::clone(&activity),
        Arc::new(DefaultClock),
    );
    Harness {
        tasks,
        instances,
        activity,
        service,
    }
}

#[rstest]
#[case(TaskStatus::Todo)]
#[case(TaskStatus::InProgress)]
#[case(TaskStatus::Review)]
#[case(TaskStatus::Completed)]
#[tokio::test(flavor = "multi_thread")]
async fn dropping_onto_the_current_column_writes_and_logs_nothing(#[case] status: TaskStatus) {
    let h = harness();
    let task = task_in(status);
    h.tasks.store(&task).await.expect("store should succeed");
    let before = h
        .tasks
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");

    let report = h.service.transition(&BoardItem::Task(task.clone()), status).await;

    assert_eq!(report, TransitionReport::Skipped);
    let after = h
        .tasks
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed");
    assert_eq!(before, after);
    let history = h.activity.all().expect("log should read");
    assert!(history.is_empty());
}

#[rstest]
#[case(TaskStatus::Todo, TaskStatus::InProgress)]
#[case(TaskStatus::Todo, TaskStatus::Completed)]
#[case(TaskStatus::InProgress, TaskStatus::Todo)]
#[case(TaskStatus::Review, TaskStatus::InProgress)]
#[case(TaskStatus::Completed, TaskStatus::Todo)]
#[case(TaskStatus::Completed, TaskStatus::Review)]
#[tokio::test(flavor = "multi_thread")]
async fn any_column_moves_directly_to_any_other(
    #[case] from: TaskStatus,
    #[case] to: TaskStatus,
) {
    let h = harness();
    let task = task_in(from);
    h.tasks.store(&task).await.expect("store should succeed");

    let report = h.service.transition(&BoardItem::Task(task.clone()), to).await;

    let TransitionReport::Applied { item, old_status } = report else {
        panic!("expected Applied, got {report:?}");
    };
    assert_eq!(old_status, from);
    assert_eq!(item.status(), to);

    let stored = h
        .tasks
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should still exist");
    assert_eq!(stored.status(), to);
    // Completion stamp follows the status on every path.
    assert_eq!(stored.completed_at().is_some(), to == TaskStatus::Completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn applied_moves_append_one_history_record(#[values(true, false)] recurring: bool) {
    let h = harness();
    let item = if recurring {
        let instance = instance_in(TaskStatus::Todo);
        h.instances
            .store(&instance)
            .await
            .expect("store should succeed");
        BoardItem::Instance(instance)
    } else {
        let task = task_in(TaskStatus::Todo);
        h.tasks.store(&task).await.expect("store should succeed");
        BoardItem::Task(task)
    };

    let report = h.service.transition(&item, TaskStatus::InProgress).await;
    assert!(matches!(report, TransitionReport::Applied { .. }));

    let history = h.activity.all().expect("log should read");
    assert_eq!(history.len(), 1);
    let entry = history.first().expect("one entry");
    assert_eq!(entry.action(), ActivityAction::UpdateStatus);
    assert_eq!(entry.entity_kind(), item.entity_kind());
    assert_eq!(entry.entity_id(), item.entity_id());

    let details: StatusChangeDetails =
        serde_json::from_value(entry.details().clone()).expect("details deserialize");
    assert_eq!(details.task_title, item.title());
    assert_eq!(details.old_status, TaskStatus::Todo);
    assert_eq!(details.new_status, TaskStatus::InProgress);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn completing_an_instance_stamps_and_reopening_clears() {
    let h = harness();
    let instance = instance_in(TaskStatus::Review);
    h.instances
        .store(&instance)
        .await
        .expect("store should succeed");

    let completed = h
        .service
        .transition(&BoardItem::Instance(instance), TaskStatus::Completed)
        .await;
    let TransitionReport::Applied { item: completed, .. } = completed else {
        panic!("expected Applied");
    };
    let BoardItem::Instance(ref done) = completed else {
        panic!("variant must be preserved");
    };
    assert!(done.completed_at().is_some());

    let reopened = h.service.transition(&completed, TaskStatus::Todo).await;
    let TransitionReport::Applied { item: reopened, .. } = reopened else {
        panic!("expected Applied");
    };
    let BoardItem::Instance(back) = reopened else {
        panic!("variant must be preserved");
    };
    assert!(back.completed_at().is_none());
    assert_eq!(back.status(), TaskStatus::Todo);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn write_failures_collapse_to_failed_without_history() {
    let activity = Arc::new(InMemoryActivityLog::new());
    let service = StatusTransitionService::new(
        Arc::new(FailingTaskRepository),
        Arc::new(FailingInstanceRepository),
        Arc::clone(&activity),
        Arc::new(DefaultClock),
    );
    let task = task_in(TaskStatus::Todo);

    let report = service
        .transition(&BoardItem::Task(task), TaskStatus::Review)
        .await;

    assert_eq!(report, TransitionReport::Failed);
    let history = activity.all().expect("log should read");
    assert!(history.is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn moves_survive_a_refusing_activity_log() {
    // A lost history record must never fail the move it was describing.
    use crate::activity::domain::ActivityEntry;
    use crate::activity::ports::{
        ActivityRecorder, ActivityRecorderError, ActivityRecorderResult,
    };
    use async_trait::async_trait;

    struct RefusingLog;

    #[async_trait]
    impl ActivityRecorder for RefusingLog {
        async fn append(&self, _entry: &ActivityEntry) -> ActivityRecorderResult<()> {
            Err(ActivityRecorderError::Rejected("denied".to_owned()))
        }

        async fn list_for_entity(
            &self,
            _entity_id: &str,
        ) -> ActivityRecorderResult<Vec<ActivityEntry>> {
            Ok(Vec::new())
        }
    }

    let tasks = Arc::new(InMemoryTaskRepository::new());
    let service = StatusTransitionService::new(
        Arc::clone(&tasks),
        Arc::new(InMemoryTaskInstanceRepository::new()),
        Arc::new(RefusingLog),
        Arc::new(DefaultClock),
    );
    let task = task_in(TaskStatus::Todo);
    tasks.store(&task).await.expect("store should succeed");

    let report = service
        .transition(&BoardItem::Task(task.clone()), TaskStatus::Completed)
        .await;

    assert!(matches!(report, TransitionReport::Applied { .. }));
    let stored = tasks
        .find_by_id(task.id())
        .await
        .expect("lookup should succeed")
        .expect("task should exist");
    assert_eq!(stored.status(), TaskStatus::Completed);
}
