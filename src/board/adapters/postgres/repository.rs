//! `PostgreSQL` board repository implementations.

use super::{
    models::{NewTaskInstanceRow, NewTaskRow, TaskInstanceRow, TaskRow},
    schema::{task_instances, tasks},
};
use crate::board::{
    domain::{
        PersistedInstanceData, PersistedTaskData, Priority, RecurringTaskId, Task, TaskId,
        TaskInstance, TaskInstanceId, TaskStatus,
    },
    ports::{
        BoardRepositoryError, BoardRepositoryResult, TaskInstanceRepository, TaskRepository,
    },
};
use crate::directory::domain::ProfileId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by board adapters.
pub type BoardPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed task repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskRepository {
    pool: BoardPgPool,
}

impl PostgresTaskRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

async fn run_blocking<F, T>(pool: &BoardPgPool, f: F) -> BoardRepositoryResult<T>
where
    F: FnOnce(&mut PgConnection) -> BoardRepositoryResult<T> + Send + 'static,
    T: Send + 'static,
{
    let pool = pool.clone();
    tokio::task::spawn_blocking(move || {
        let mut connection = pool.get().map_err(BoardRepositoryError::persistence)?;
        f(&mut connection)
    })
    .await
    .map_err(BoardRepositoryError::persistence)?
}

#[async_trait]
impl TaskRepository for PostgresTaskRepository {
    async fn store(&self, task: &Task) -> BoardRepositoryResult<()> {
        let task_id = task.id();
        let new_row = task_to_new_row(task);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(tasks::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateTask(task_id)
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, task: &Task) -> BoardRepositoryResult<()> {
        let task_id = task.id();
        let row = task_to_new_row(task);

        run_blocking(&self.pool, move |connection| {
            let affected = diesel::update(tasks::table.filter(tasks::id.eq(row.id)))
                .set((
                    tasks::title.eq(row.title),
                    tasks::description.eq(row.description),
                    tasks::status.eq(row.status),
                    tasks::priority.eq(row.priority),
                    tasks::assignee_id.eq(row.assignee_id),
                    tasks::due_at.eq(row.due_at),
                    tasks::category.eq(row.category),
                    tasks::completed_at.eq(row.completed_at),
                    tasks::updated_at.eq(row.updated_at),
                ))
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;

            if affected == 0 {
                return Err(BoardRepositoryError::TaskNotFound(task_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskId) -> BoardRepositoryResult<Option<Task>> {
        run_blocking(&self.pool, move |connection| {
            let row = tasks::table
                .filter(tasks::id.eq(id.into_inner()))
                .select(TaskRow::as_select())
                .first::<TaskRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_task).transpose()
        })
        .await
    }

    async fn list_all(&self) -> BoardRepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn list_by_status(&self, status: TaskStatus) -> BoardRepositoryResult<Vec<Task>> {
        run_blocking(&self.pool, move |connection| {
            let rows = tasks::table
                .filter(tasks::status.eq(status.as_str()))
                .order(tasks::created_at.asc())
                .select(TaskRow::as_select())
                .load::<TaskRow>(connection)
                .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_task).collect()
        })
        .await
    }

    async fn delete(&self, id: TaskId) -> BoardRepositoryResult<()> {
        run_blocking(&self.pool, move |connection| {
            let affected = diesel::delete(tasks::table.filter(tasks::id.eq(id.into_inner())))
                .execute(connection)
                .map_err(BoardRepositoryError::persistence)?;

            if affected == 0 {
                return Err(BoardRepositoryError::TaskNotFound(id));
            }
            Ok(())
        })
        .await
    }
}

/// `PostgreSQL`-backed instance repository.
#[derive(Debug, Clone)]
pub struct PostgresTaskInstanceRepository {
    pool: BoardPgPool,
}

impl PostgresTaskInstanceRepository {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: BoardPgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl TaskInstanceRepository for PostgresTaskInstanceRepository {
    async fn store(&self, instance: &TaskInstance) -> BoardRepositoryResult<()> {
        let instance_id = instance.id();
        let new_row = instance_to_new_row(instance);

        run_blocking(&self.pool, move |connection| {
            diesel::insert_into(task_instances::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        BoardRepositoryError::DuplicateInstance(instance_id)
                    }
                    _ => BoardRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update(&self, instance: &TaskInstance) -> BoardRepositoryResult<()> {
        let instance_id = instance.id();
        let row = instance_to_new_row(instance);

        run_blocking(&self.pool, move |connection| {
            let affected =
                diesel::update(task_instances::table.filter(task_instances::id.eq(row.id)))
                    .set((
                        task_instances::status.eq(row.status),
                        task_instances::priority.eq(row.priority),
                        task_instances::completed_at.eq(row.completed_at),
                        task_instances::updated_at.eq(row.updated_at),
                    ))
                    .execute(connection)
                    .map_err(BoardRepositoryError::persistence)?;

            if affected == 0 {
                return Err(BoardRepositoryError::InstanceNotFound(instance_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_by_id(&self, id: TaskInstanceId) -> BoardRepositoryResult<Option<TaskInstance>> {
        run_blocking(&self.pool, move |connection| {
            let row = task_instances::table
                .filter(task_instances::id.eq(id.into_inner()))
                .select(TaskInstanceRow::as_select())
                .first::<TaskInstanceRow>(connection)
                .optional()
                .map_err(BoardRepositoryError::persistence)?;
            row.map(row_to_instance).transpose()
        })
        .await
    }

    async fn list_all(&self) -> BoardRepositoryResult<Vec<TaskInstance>> {
        run_blocking(&self.pool, move |connection| {
            let rows = task_instances::table
                .order(task_instances::due_date.asc())
                .select(TaskInstanceRow::as_select())
                .load::<TaskInstanceRow>(connection)
                .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_instance).collect()
        })
        .await
    }

    async fn list_by_status(
        &self,
        status: TaskStatus,
    ) -> BoardRepositoryResult<Vec<TaskInstance>> {
        run_blocking(&self.pool, move |connection| {
            let rows = task_instances::table
                .filter(task_instances::status.eq(status.as_str()))
                .order(task_instances::due_date.asc())
                .select(TaskInstanceRow::as_select())
                .load::<TaskInstanceRow>(connection)
                .map_err(BoardRepositoryError::persistence)?;
            rows.into_iter().map(row_to_instance).collect()
        })
        .await
    }
}

fn task_to_new_row(task: &Task) -> NewTaskRow {
    NewTaskRow {
        id: task.id().into_inner(),
        title: task.title().to_owned(),
        description: task.description().map(str::to_owned),
        status: task.status().as_str().to_owned(),
        priority: task.priority().as_str().to_owned(),
        assignee_id: task.assignee().map(ProfileId::into_inner),
        due_at: task.due_at(),
        category: task.category().map(str::to_owned),
        completed_at: task.completed_at(),
        created_at: task.created_at(),
        updated_at: task.updated_at(),
    }
}

fn instance_to_new_row(instance: &TaskInstance) -> NewTaskInstanceRow {
    NewTaskInstanceRow {
        id: instance.id().into_inner(),
        recurring_task_id: instance.recurring_task().into_inner(),
        title: instance.title().to_owned(),
        description: instance.description().map(str::to_owned),
        assignee_id: instance.assignee().map(ProfileId::into_inner),
        priority: instance.priority().as_str().to_owned(),
        due_date: instance.due_date(),
        status: instance.status().as_str().to_owned(),
        completed_at: instance.completed_at(),
        created_at: instance.created_at(),
        updated_at: instance.updated_at(),
    }
}

fn row_to_task(row: TaskRow) -> BoardRepositoryResult<Task> {
    // Unknown stored statuses degrade to the first column rather than
    // failing the whole board load.
    let status = TaskStatus::from_stored(&row.status);
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(BoardRepositoryError::persistence)?;

    Ok(Task::from_persisted(PersistedTaskData {
        id: TaskId::from_uuid(row.id),
        title: row.title,
        description: row.description,
        status,
        priority,
        assignee: row.assignee_id.map(ProfileId::from_uuid),
        due_at: row.due_at,
        category: row.category,
        completed_at: row.completed_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}

fn row_to_instance(row: TaskInstanceRow) -> BoardRepositoryResult<TaskInstance> {
    let status = TaskStatus::from_stored(&row.status);
    let priority =
        Priority::try_from(row.priority.as_str()).map_err(BoardRepositoryError::persistence)?;

    Ok(TaskInstance::from_persisted(PersistedInstanceData {
        id: TaskInstanceId::from_uuid(row.id),
        recurring_task: RecurringTaskId::from_uuid(row.recurring_task_id),
        title: row.title,
        description: row.description,
        assignee: row.assignee_id.map(ProfileId::from_uuid),
        priority,
        due_date: row.due_date,
        status,
        completed_at: row.completed_at,
        created_at: row.created_at,
        updated_at: row.updated_at,
    }))
}
