//! `PostgreSQL` activity log implementation.

use super::{
    models::{ActivityEntryRow, NewActivityEntryRow},
    schema::activity_entries,
};
use crate::activity::{
    domain::{
        ActivityAction, ActivityEntry, ActivityEntryId, EntityKind, PersistedActivityEntryData,
    },
    ports::{ActivityRecorder, ActivityRecorderError, ActivityRecorderResult},
};
use crate::directory::domain::ProfileId;
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};

/// `PostgreSQL` connection pool type used by the activity log adapter.
pub type ActivityPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed activity log.
#[derive(Debug, Clone)]
pub struct PostgresActivityLog {
    pool: ActivityPgPool,
}

impl PostgresActivityLog {
    /// Creates a new log from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: ActivityPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> ActivityRecorderResult<T>
    where
        F: FnOnce(&mut PgConnection) -> ActivityRecorderResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(ActivityRecorderError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(ActivityRecorderError::persistence)?
    }
}

#[async_trait]
impl ActivityRecorder for PostgresActivityLog {
    async fn append(&self, entry: &ActivityEntry) -> ActivityRecorderResult<()> {
        let new_row = to_new_row(entry);
        self.run_blocking(move |connection| {
            diesel::insert_into(activity_entries::table)
                .values(&new_row)
                .execute(connection)
                .map_err(ActivityRecorderError::persistence)?;
            Ok(())
        })
        .await
    }

    async fn list_for_entity(&self, entity_id: &str) -> ActivityRecorderResult<Vec<ActivityEntry>> {
        let lookup_id = entity_id.to_owned();
        self.run_blocking(move |connection| {
            let rows = activity_entries::table
                .filter(activity_entries::entity_id.eq(lookup_id))
                .order(activity_entries::created_at.asc())
                .select(ActivityEntryRow::as_select())
                .load::<ActivityEntryRow>(connection)
                .map_err(ActivityRecorderError::persistence)?;
            rows.into_iter().map(row_to_entry).collect()
        })
        .await
    }
}

fn to_new_row(entry: &ActivityEntry) -> NewActivityEntryRow {
    NewActivityEntryRow {
        id: entry.id().into_inner(),
        actor_id: entry.actor().map(ProfileId::into_inner),
        action: entry.action().as_str().to_owned(),
        entity_kind: entry.entity_kind().as_str().to_owned(),
        entity_id: entry.entity_id().to_owned(),
        details: entry.details().clone(),
        created_at: entry.created_at(),
    }
}

fn row_to_entry(row: ActivityEntryRow) -> ActivityRecorderResult<ActivityEntry> {
    let action =
        ActivityAction::try_from(row.action.as_str()).map_err(ActivityRecorderError::persistence)?;
    let entity_kind =
        EntityKind::try_from(row.entity_kind.as_str()).map_err(ActivityRecorderError::persistence)?;

    Ok(ActivityEntry::from_persisted(PersistedActivityEntryData {
        id: ActivityEntryId::from_uuid(row.id),
        actor: row.actor_id.map(ProfileId::from_uuid),
        action,
        entity_kind,
        entity_id: row.entity_id,
        details: row.details,
        created_at: row.created_at,
    }))
}
