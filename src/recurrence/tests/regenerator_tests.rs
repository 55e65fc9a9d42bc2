//! Tests for the regeneration sweep.

use std::sync::Arc;

use super::fixtures::{completed_instance_of, moment, template_record};
use crate::activity::adapters::memory::InMemoryActivityLog;
use crate::activity::domain::ActivityAction;
use crate::board::{
    adapters::memory::InMemoryTaskInstanceRepository,
    domain::{TaskInstance, TaskInstanceId, TaskStatus},
    ports::{BoardRepositoryError, BoardRepositoryResult, TaskInstanceRepository},
};
use crate::recurrence::{
    adapters::memory::InMemoryRecurringTaskRepository,
    ports::RecurringTaskRepository,
    services::{RegenerationDetails, Regenerator},
};
use async_trait::async_trait;
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::rstest;

type MemoryRegenerator = Regenerator<
    InMemoryRecurringTaskRepository,
    InMemoryTaskInstanceRepository,
    InMemoryActivityLog,
    DefaultClock,
>;

struct Harness {
    templates: Arc<InMemoryRecurringTaskRepository>,
    instances: Arc<InMemoryTaskInstanceRepository>,
    activity: Arc<InMemoryActivityLog>,
    regenerator: MemoryRegenerator,
}

fn harness() -> Harness {
    let templates = Arc::new(InMemoryRecurringTaskRepository::new());
    let instances = Arc::new(InMemoryTaskInstanceRepository::new());
    let activity = Arc::new(InMemoryActivityLog::new());
    let regenerator = Regenerator::new(
        Arc::clone(&templates),
        Arc::clone(&instances),
        Arc::clone(&activity),
        Arc::new(DefaultClock),
    );
    Harness {
        templates,
        instances,
        activity,
        regenerator,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_completed_instance_of_an_open_series_regenerates_once() {
    let h = harness();
    let template = template_record("Fechar caixa", None, Some(moment(8)));
    let done = completed_instance_of(&template, moment(10));
    h.templates
        .store(&template)
        .await
        .expect("store should succeed");
    h.instances.store(&done).await.expect("store should succeed");

    let report = h.regenerator.sweep().await;

    assert_eq!(report.examined, 1);
    assert_eq!(report.regenerated, 1);
    assert!(report.is_clean());

    let all = h.instances.list_all().await.expect("listing should succeed");
    assert_eq!(all.len(), 2, "the completed instance stays as history");

    let fresh = all
        .iter()
        .find(|instance| instance.id() != done.id())
        .expect("a fresh instance exists");
    assert_eq!(fresh.status(), TaskStatus::Todo);
    assert!(fresh.completed_at().is_none());
    assert_eq!(fresh.title(), done.title());
    assert_eq!(fresh.assignee(), done.assignee());
    assert_eq!(fresh.priority(), done.priority());
    assert_eq!(fresh.recurring_task(), template.id());

    let refreshed = h
        .templates
        .find_by_id(template.id())
        .await
        .expect("lookup should succeed")
        .expect("template should exist");
    let last = refreshed.last_generated().expect("generation recorded");
    assert!(last > moment(10));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_ended_series_spawns_nothing_and_is_not_an_error() {
    let h = harness();
    let ended = NaiveDate::from_ymd_opt(2024, 12, 31).expect("valid date");
    let template = template_record("Enviar relatório", Some(ended), Some(moment(8)));
    let done = completed_instance_of(&template, moment(10));
    h.templates
        .store(&template)
        .await
        .expect("store should succeed");
    h.instances.store(&done).await.expect("store should succeed");

    let report = h.regenerator.sweep().await;

    assert_eq!(report.examined, 1);
    assert_eq!(report.ended, 1);
    assert_eq!(report.regenerated, 0);
    assert!(report.is_clean());

    let all = h.instances.list_all().await.expect("listing should succeed");
    assert_eq!(all.len(), 1);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn a_second_sweep_does_not_duplicate_the_successor() {
    let h = harness();
    let template = template_record("Conferir estoque", None, None);
    let done = completed_instance_of(&template, moment(10));
    h.templates
        .store(&template)
        .await
        .expect("store should succeed");
    h.instances.store(&done).await.expect("store should succeed");

    let first = h.regenerator.sweep().await;
    assert_eq!(first.regenerated, 1);

    let second = h.regenerator.sweep().await;
    assert_eq!(second.examined, 1);
    assert_eq!(second.regenerated, 0);
    assert_eq!(second.already_current, 1);

    let all = h.instances.list_all().await.expect("listing should succeed");
    assert_eq!(all.len(), 2);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn an_orphaned_instance_is_counted_and_skipped() {
    let h = harness();
    let template = template_record("Limpar arquivos", None, None);
    // Stored instance references a template that was never stored.
    let done = completed_instance_of(&template, moment(10));
    h.instances.store(&done).await.expect("store should succeed");

    let report = h.regenerator.sweep().await;

    assert_eq!(report.examined, 1);
    assert_eq!(report.failures, 1);
    assert!(!report.is_clean());
}

/// Instance store that refuses to persist one poisoned title.
#[derive(Clone)]
struct PoisonedInstanceRepository {
    inner: Arc<InMemoryTaskInstanceRepository>,
    poisoned_title: String,
}

#[async_trait]
impl TaskInstanceRepository for PoisonedInstanceRepository {
    async fn store(&self, instance: &TaskInstance) -> BoardRepositoryResult<()> {
        if instance.title() == self.poisoned_title {
            return Err(BoardRepositoryError::persistence(std::io::Error::other(
                "connection reset",
            )));
        }
        self.inner.store(instance).await
    }

    async fn update(&self, instance: &TaskInstance) -> BoardRepositoryResult<()> {
        self.inner.update(instance).await
    }

    async fn find_by_id(
        &self,
        id: TaskInstanceId,
    ) -> BoardRepositoryResult<Option<TaskInstance>> {
        self.inner.find_by_id(id).await
    }

    async fn list_all(&self) -> BoardRepositoryResult<Vec<TaskInstance>> {
        self.inner.list_all().await
    }

    async fn list_by_status(
        &self,
        status: TaskStatus,
    ) -> BoardRepositoryResult<Vec<TaskInstance>> {
        self.inner.list_by_status(status).await
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn one_failing_item_does_not_abort_the_rest_of_the_sweep() {
    let templates = Arc::new(InMemoryRecurringTaskRepository::new());
    let inner = Arc::new(InMemoryTaskInstanceRepository::new());
    let instances = Arc::new(PoisonedInstanceRepository {
        inner: Arc::clone(&inner),
        poisoned_title: "Fechar caixa".to_owned(),
    });
    let regenerator = Regenerator::new(
        Arc::clone(&templates),
        Arc::clone(&instances),
        Arc::new(InMemoryActivityLog::new()),
        Arc::new(DefaultClock),
    );

    let poisoned = template_record("Fechar caixa", None, None);
    let healthy = template_record("Enviar resumo", None, None);
    templates.store(&poisoned).await.expect("store should succeed");
    templates.store(&healthy).await.expect("store should succeed");
    inner
        .store(&completed_instance_of(&poisoned, moment(10)))
        .await
        .expect("store should succeed");
    inner
        .store(&completed_instance_of(&healthy, moment(11)))
        .await
        .expect("store should succeed");

    let report = regenerator.sweep().await;

    assert_eq!(report.examined, 2);
    assert_eq!(report.regenerated, 1);
    assert_eq!(report.failures, 1);

    let fresh: Vec<_> = inner
        .list_by_status(TaskStatus::Todo)
        .await
        .expect("listing should succeed");
    assert_eq!(fresh.len(), 1);
    assert_eq!(
        fresh.first().expect("one fresh instance").title(),
        "Enviar resumo"
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn regeneration_appends_a_history_record_naming_the_predecessor() {
    let h = harness();
    let template = template_record("Fechar caixa", None, None);
    let done = completed_instance_of(&template, moment(10));
    h.templates
        .store(&template)
        .await
        .expect("store should succeed");
    h.instances.store(&done).await.expect("store should succeed");

    let report = h.regenerator.sweep().await;
    assert_eq!(report.regenerated, 1);

    let history = h.activity.all().expect("log should read");
    assert_eq!(history.len(), 1);
    let entry = history.first().expect("one entry");
    assert_eq!(entry.action(), ActivityAction::RegenerateTask);

    let details: RegenerationDetails =
        serde_json::from_value(entry.details().clone()).expect("details deserialize");
    assert_eq!(details.task_title, "Fechar caixa");
    assert_eq!(details.predecessor, done.id());
}
