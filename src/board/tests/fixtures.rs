//! Shared doubles and sample data for board tests.

use async_trait::async_trait;
use mockable::DefaultClock;
use std::sync::{Arc, Mutex};

use crate::activity::adapters::memory::InMemoryActivityLog;
use crate::board::{
    adapters::memory::{InMemoryTaskInstanceRepository, InMemoryTaskRepository},
    domain::{
        NewInstanceData, Priority, RecurringTaskId, Task, TaskId, TaskInstance, TaskInstanceId,
        TaskStatus,
    },
    ports::{
        BoardNotifier, BoardRepositoryError, BoardRepositoryResult, TaskInstanceRepository,
        TaskRepository,
    },
    services::StatusTransitionService,
};
use chrono::NaiveDate;

/// Transition service wired entirely to in-memory adapters.
pub type MemoryTransitionService = StatusTransitionService<
    InMemoryTaskRepository,
    InMemoryTaskInstanceRepository,
    InMemoryActivityLog,
    DefaultClock,
>;

/// Builds a task sitting in the given column.
pub fn task_in(status: TaskStatus) -> Task {
    let mut task =
        Task::new("Preparar relatório mensal", Priority::Medium, &DefaultClock).expect("valid title");
    if status != TaskStatus::Todo {
        task.set_status(status, &DefaultClock);
    }
    task
}

/// Builds a recurring instance sitting in the given column.
pub fn instance_in(status: TaskStatus) -> TaskInstance {
    let mut instance = TaskInstance::generate(
        NewInstanceData {
            recurring_task: RecurringTaskId::new(),
            title: "Conferir caixa".to_owned(),
            description: None,
            assignee: None,
            priority: Priority::High,
            due_date: NaiveDate::from_ymd_opt(2026, 8, 7).expect("valid date"),
        },
        &DefaultClock,
    );
    if status != TaskStatus::Todo {
        instance.set_status(status, &DefaultClock);
    }
    instance
}

/// Task repository whose writes always fail.
#[derive(Debug, Clone, Default)]
pub struct FailingTaskRepository;

#[async_trait]
impl TaskRepository for FailingTaskRepository {
    async fn store(&self, _task: &Task) -> BoardRepositoryResult<()> {
        Err(write_refused())
    }

    async fn update(&self, _task: &Task) -> BoardRepositoryResult<()> {
        Err(write_refused())
    }

    async fn find_by_id(&self, _id: TaskId) -> BoardRepositoryResult<Option<Task>> {
        Ok(None)
    }

    async fn list_all(&self) -> BoardRepositoryResult<Vec<Task>> {
        Ok(Vec::new())
    }

    async fn list_by_status(&self, _status: TaskStatus) -> BoardRepositoryResult<Vec<Task>> {
        Ok(Vec::new())
    }

    async fn delete(&self, _id: TaskId) -> BoardRepositoryResult<()> {
        Err(write_refused())
    }
}

/// Instance repository whose writes always fail.
#[derive(Debug, Clone, Default)]
pub struct FailingInstanceRepository;

#[async_trait]
impl TaskInstanceRepository for FailingInstanceRepository {
    async fn store(&self, _instance: &TaskInstance) -> BoardRepositoryResult<()> {
        Err(write_refused())
    }

    async fn update(&self, _instance: &TaskInstance) -> BoardRepositoryResult<()> {
        Err(write_refused())
    }

    async fn find_by_id(
        &self,
        _id: TaskInstanceId,
    ) -> BoardRepositoryResult<Option<TaskInstance>> {
        Ok(None)
    }

    async fn list_all(&self) -> BoardRepositoryResult<Vec<TaskInstance>> {
        Ok(Vec::new())
    }

    async fn list_by_status(
        &self,
        _status: TaskStatus,
    ) -> BoardRepositoryResult<Vec<TaskInstance>> {
        Ok(Vec::new())
    }
}

fn write_refused() -> BoardRepositoryError {
    BoardRepositoryError::persistence(std::io::Error::other("connection reset"))
}

/// Notifier that records every toast it is asked to show.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<(Toast, String)>>>,
}

/// Which styling a recorded toast used.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toast {
    /// Confirmation styling.
    Success,
    /// Destructive styling.
    Error,
}

impl RecordingNotifier {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded toasts in emission order.
    pub fn recorded(&self) -> Vec<(Toast, String)> {
        self.messages.lock().expect("notifier lock").clone()
    }
}

impl BoardNotifier for RecordingNotifier {
    fn notify_success(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier lock")
            .push((Toast::Success, message.to_owned()));
    }

    fn notify_error(&self, message: &str) {
        self.messages
            .lock()
            .expect("notifier lock")
            .push((Toast::Error, message.to_owned()));
    }
}
