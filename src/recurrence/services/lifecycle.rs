//! Service layer for creating recurring templates.

use crate::activity::{
    domain::{ActivityAction, ActivityEntry, EntityKind},
    ports::{ActivityRecorder, record_best_effort},
};
use crate::board::{
    domain::{Priority, TaskInstance},
    ports::{BoardRepositoryError, TaskInstanceRepository},
};
use crate::directory::domain::ProfileId;
use crate::recurrence::{
    domain::{Cadence, RecurrenceDomainError, RecurringTask},
    ports::{RecurringTaskRepository, RecurringTaskRepositoryError},
};
use chrono::NaiveDate;
use mockable::Clock;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Request payload for creating a recurring template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateRecurringTaskRequest {
    title: String,
    description: Option<String>,
    assignee: Option<ProfileId>,
    priority: Priority,
    cadence: Cadence,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
}

impl CreateRecurringTaskRequest {
    /// Creates a request with the required fields.
    #[must_use]
    pub fn new(
        title: impl Into<String>,
        priority: Priority,
        cadence: Cadence,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            assignee: None,
            priority,
            cadence,
            start_date,
            end_date: None,
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the assignee.
    #[must_use]
    pub const fn with_assignee(mut self, assignee: ProfileId) -> Self {
        self.assignee = Some(assignee);
        self
    }

    /// Sets the day the series stops spawning.
    #[must_use]
    pub const fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }
}

/// Detail payload appended to the activity log when a template is created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTaskCreatedDetails {
    /// Title of the created template.
    pub task_title: String,
    /// Cadence type literal.
    pub recurrence: String,
}

/// Service-level errors for recurrence lifecycle operations.
#[derive(Debug, Error)]
pub enum RecurrenceLifecycleError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] RecurrenceDomainError),

    /// Template persistence failed.
    #[error(transparent)]
    Templates(#[from] RecurringTaskRepositoryError),

    /// Instance persistence failed.
    #[error(transparent)]
    Instances(#[from] BoardRepositoryError),
}

/// Result type for recurrence lifecycle operations.
pub type RecurrenceLifecycleResult<T> = Result<T, RecurrenceLifecycleError>;

/// Recurring-template orchestration service.
#[derive(Clone)]
pub struct RecurrenceService<R, I, A, C>
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
    actor: Option<ProfileId>,
}

impl<R, I, A, C> RecurrenceService<R, I, A, C>
where
    R: RecurringTaskRepository,
    I: TaskInstanceRepository,
    A: ActivityRecorder,
    C: Clock + Send + Sync,
{
    /// Creates a new recurrence service with no actor attribution.
    #[must_use]
    pub const fn new(templates: Arc<R>, instances: Arc<I>, activity: Arc<A>, clock: Arc<C>) -> Self {
        Self {
            templates,
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

    /// Creates a template and spawns its first instance, due on the start
    /// date.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceLifecycleError`] when validation fails or either
    /// write is rejected.
    pub async fn create_template(
        &self,
        request: CreateRecurringTaskRequest,
    ) -> RecurrenceLifecycleResult<(RecurringTask, TaskInstance)> {
        let mut template = RecurringTask::new(
            request.title,
            request.priority,
            request.cadence,
            request.start_date,
            &*self.clock,
        )?;
        if let Some(description) = request.description {
            template = template.with_description(description);
        }
        if let Some(assignee) = request.assignee {
            template = template.with_assignee(assignee);
        }
        if let Some(end_date) = request.end_date {
            template = template.with_end_date(end_date);
        }

        let first = template.spawn_instance(request.start_date, &*self.clock);
        template.mark_generated(&*self.clock);

        self.templates.store(&template).await?;
        self.instances.store(&first).await?;
        self.log_created(&template).await;
        Ok((template, first))
    }

    /// Returns every template.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceLifecycleError::Templates`] when the lookup fails.
    pub async fn list_templates(&self) -> RecurrenceLifecycleResult<Vec<RecurringTask>> {
        Ok(self.templates.list_all().await?)
    }

    async fn log_created(&self, template: &RecurringTask) {
        let details = RecurringTaskCreatedDetails {
            task_title: template.title().to_owned(),
            recurrence: template.cadence().as_str().to_owned(),
        };
        match serde_json::to_value(&details) {
            Ok(details) => {
                let entry = ActivityEntry::new(
                    ActivityAction::CreateRecurringTask,
                    EntityKind::RecurringTask,
                    template.id().to_string(),
                    details,
                    self.actor,
                    &*self.clock,
                );
                record_best_effort(&*self.activity, entry).await;
            }
            Err(err) => {
                log::warn!(
                    "template-created details for {} not serialized: {err}",
                    template.id()
                );
            }
        }
    }
}
