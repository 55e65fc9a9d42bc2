//! Recurring-task template aggregate.

use super::{Cadence, RecurrenceDomainError};
use crate::board::domain::{NewInstanceData, Priority, RecurringTaskId, TaskInstance};
use crate::directory::domain::ProfileId;
use chrono::{DateTime, NaiveDate, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A template describing a repeating obligation.
///
/// Templates never appear on the board themselves; they spawn
/// [`TaskInstance`]s that do. `last_generated` records the most recent spawn
/// and is what keeps one completion from regenerating more than once.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecurringTask {
    id: RecurringTaskId,
    title: String,
    description: Option<String>,
    assignee: Option<ProfileId>,
    priority: Priority,
    cadence: Cadence,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    last_generated: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedRecurringTaskData {
    /// Persisted template identifier.
    pub id: RecurringTaskId,
    /// Persisted title.
    pub title: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted assignee, if any.
    pub assignee: Option<ProfileId>,
    /// Persisted priority.
    pub priority: Priority,
    /// Persisted cadence.
    pub cadence: Cadence,
    /// Persisted start date.
    pub start_date: NaiveDate,
    /// Persisted end date, if any.
    pub end_date: Option<NaiveDate>,
    /// Persisted last-generation timestamp, if any.
    pub last_generated: Option<DateTime<Utc>>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted latest-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl RecurringTask {
    /// Creates a new template.
    ///
    /// # Errors
    ///
    /// Returns [`RecurrenceDomainError::EmptyTitle`] when the title is empty
    /// after trimming.
    pub fn new(
        title: impl Into<String>,
        priority: Priority,
        cadence: Cadence,
        start_date: NaiveDate,
        clock: &impl Clock,
    ) -> Result<Self, RecurrenceDomainError> {
        let raw: String = title.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(RecurrenceDomainError::EmptyTitle);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: RecurringTaskId::new(),
            title: trimmed.to_owned(),
            description: None,
            assignee: None,
            priority,
            cadence,
            start_date,
            end_date: None,
            last_generated: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a template from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedRecurringTaskData) -> Self {
        Self {
            id: data.id,
            title: data.title,
            description: data.description,
            assignee: data.assignee,
            priority: data.priority,
            cadence: data.cadence,
            start_date: data.start_date,
            end_date: data.end_date,
            last_generated: data.last_generated,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Sets the free-form description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Assigns spawned instances to a profile.
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

    /// Returns the template identifier.
    #[must_use]
    pub const fn id(&self) -> RecurringTaskId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the assignee reference, if any.
    #[must_use]
    pub const fn assignee(&self) -> Option<ProfileId> {
        self.assignee
    }

    /// Returns the priority spawned instances carry.
    #[must_use]
    pub const fn priority(&self) -> Priority {
        self.priority
    }

    /// Returns the cadence.
    #[must_use]
    pub const fn cadence(&self) -> &Cadence {
        &self.cadence
    }

    /// Returns the day the series starts.
    #[must_use]
    pub const fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    /// Returns the day the series stops spawning, if set.
    #[must_use]
    pub const fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    /// Returns when the series last spawned an instance, if ever.
    #[must_use]
    pub const fn last_generated(&self) -> Option<DateTime<Utc>> {
        self.last_generated
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the latest-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Returns `true` once the end date lies strictly in the past.
    ///
    /// An end date equal to `today` still spawns; the series stops the day
    /// after.
    #[must_use]
    pub fn series_ended(&self, today: NaiveDate) -> bool {
        self.end_date.is_some_and(|end| end < today)
    }

    /// Spawns a fresh instance copying this template's card data.
    #[must_use]
    pub fn spawn_instance(&self, due_date: NaiveDate, clock: &impl Clock) -> TaskInstance {
        TaskInstance::generate(
            NewInstanceData {
                recurring_task: self.id,
                title: self.title.clone(),
                description: self.description.clone(),
                assignee: self.assignee,
                priority: self.priority,
                due_date,
            },
            clock,
        )
    }

    /// Records that the series just spawned an instance.
    pub fn mark_generated(&mut self, clock: &impl Clock) {
        let now = clock.utc();
        self.last_generated = Some(now);
        self.updated_at = now;
    }
}
