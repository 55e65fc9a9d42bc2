//! `PostgreSQL` template repository implementation.

use super::{
    models::{NewRecurringTaskRow, RecurringTaskRow},
    schema::recurring_tasks,
};
use crate::board::domain::{Priority, RecurringTaskId};
use crate::directory::domain::ProfileId;
use crate::recurrence::{
    domain::{Cadence, PersistedRecurringTaskData, RecurringTask},
    ports::{
        RecurringTaskRepository, RecurringTaskRepositoryError, RecurringTaskRepositoryResult,
    },
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by recurrence adapters.
pub type RecurrencePgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed template repository.
#[derive(Debug, Clone)]
pub struct PostgresRecurringTaskRepository {
    pool: RecurrencePgPool,
}

impl PostgresRecurringTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: RecurrencePgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> RecurringTaskRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> RecurringTaskRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool
                .get()
                .map_err(RecurringTaskRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(RecurringTaskRepositoryError::persistence)?
    }
}

#[async_trait]
impl RecurringTaskRepository for PostgresRecurringTaskRepository {
    async fn store(&self, template: &RecurringTask) -> RecurringTaskRepositoryResult<()> {
        let template_id = template.id();
        let new_row = to_new_row(template)?;

        self.run_blocking(move |connection| {
            diesel::insert_into(recurring_tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        RecurringTaskRepositoryError::DuplicateTemplate(template_id)
                    }
                    _ => RecurringTaskRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, template: &RecurringTask) -> RecurringTaskRepositoryResult<()> {
        let template_id = template.id();
        let row = to_new_row(template)?;

        self.run_blocking(move |connection| {
            let affected =
                diesel::update(recurring_tasks::table.filter(recurring_tasks::id.eq(row.id)))
                    .set((
                        recurring_tasks::title.eq(row.title),
                        recurring_tasks::description.eq(row.description),
                        recurring_tasks::assignee_id.eq(row.assignee_id),
                        recurring_tasks::priority.eq(row.priority),
                        recurring_tasks::cadence.eq(row.cadence),
                        recurring_tasks::end_date.eq(row.end_date),
                        recurring_tasks::last_generated.eq(row.last_generated),
                        recurring_tasks::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(RecurringTaskRepositoryError::persistence)?;

            if affected == 0 {
                return Err(RecurringTaskRepositoryError::NotFound(template_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(
        &self,
        id: RecurringTaskId,
    ) -> RecurringTaskRepositoryResult<Option<RecurringTask>> {
        self.run_blocking(move |connection| {
            let row = recurring_tasks::table
                .filter(recurring_tasks::id.eq(id.into_inner()))
                .select(RecurringTaskRow::as_select())
                .first::<RecurringTaskRow>(connection)
                .optional()
                .map_err(RecurringTaskRepositoryError::persistence)?;
            row.map(row_to_template).transpose()
        })
        .await
    }

    async fn list_all(&self) -> RecurringTaskRepositoryResult<Vec<RecurringTask>> {
        self.run_blocking(move |connection| {
            let rows = recurring_tasks::table
                .order(recurring_tasks::created_at.asc())
                .select(RecurringTaskRow::as_select())
                .load::<RecurringTaskRow>(connection)
                .map_err(RecurringTaskRepositoryError::persistence)?;
            rows.into_iter().map(row_to_template).collect()
        })
        .await
    }
}

fn to_new_row(template: &RecurringTask) -> RecurringTaskRepositoryResult<NewRecurringTaskRow> {
    let cadence = serde_json::to_value(template.cadence())
        .map_err(RecurringTaskRepositoryError::persistence)?;

    Ok(NewRecurringTaskRow {
        id: template.id().into_inner(),
        title: template.title().to_owned(),
        description: template.description().map(str::to_owned),
        assignee_id: template.assignee().map(ProfileId::into_inner),
        priority: template.priority().as_str().to_owned(),
        cadence,
        start_date: template.start_date(),
        end_date: template.end_date(),
        last_generated: template.last_generated(),
        created_at: template.created_at(),
        updated_at: template.updated_at(),
    })
}

fn row_to_template(row: RecurringTaskRow) -> RecurringTaskRepositoryResult<RecurringTask> {
    let cadence = serde_json::from_value::<Cadence>(row.cadence)
        .map_err(RecurringTaskRepositoryError::invalid_persisted_data)?;
    let priority = Priority::try_from(row.priority.as_str())
        .map_err(RecurringTaskRepositoryError::invalid_persisted_data)?;

    Ok(RecurringTask::from_persisted(PersistedRecurringTaskData {
        id: RecurringTaskId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        assignee: row.assignee_id.map(ProfileId::from_uuid),
        priority,
        cadence,
        start_date: row.start_date,
        end_date: row.end_date,
        last_generated: row.last_generated,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
