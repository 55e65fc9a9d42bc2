//! `PostgreSQL` directory repository implementation.

use super::{
    models::{DepartmentRow, NewDepartmentRow, NewProfileRow, ProfileRow},
    schema::{departamentos, profiles},
};
use crate::directory::{
    domain::{
        Department, DepartmentId, PersistedDepartmentData, PersistedProfileData, Profile,
        ProfileId,
    },
    ports::{DirectoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult},
};
use async_trait::async_trait;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::r2d2::{ConnectionManager, Pool};
use diesel::result::{DatabaseErrorKind, Error as DieselError};

/// `PostgreSQL` connection pool type used by directory adapters.
pub type DirectoryPgPool = Pool<ConnectionManager<PgConnection>>;

/// `PostgreSQL`-backed directory repository.
#[derive(Debug, Clone)]
pub struct PostgresDirectory {
    pool: DirectoryPgPool,
}

impl PostgresDirectory {
    /// Creates a new repository from a `PostgreSQL` connection pool.
    #[must_use]
    pub const fn new(pool: DirectoryPgPool) -> Self {
        Self { pool }
    }

    async fn run_blocking<F, T>(&self, f: F) -> DirectoryRepositoryResult<T>
    where
        F: FnOnce(&mut PgConnection) -> DirectoryRepositoryResult<T> + Send + 'static,
        T: Send + 'static,
    {
        let pool = self.pool.clone();
        tokio::task::spawn_blocking(move || {
            let mut connection = pool.get().map_err(DirectoryRepositoryError::persistence)?;
            f(&mut connection)
        })
        .await
        .map_err(DirectoryRepositoryError::persistence)?
    }
}

#[async_trait]
impl DirectoryRepository for PostgresDirectory {
    async fn store_department(&self, department: &Department) -> DirectoryRepositoryResult<()> {
        let department_id = department.id();
        let new_row = department_to_new_row(department);

        self.run_blocking(move |connection| {
            diesel::insert_into(departamentos::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DirectoryRepositoryError::DuplicateDepartment(department_id)
                    }
                    _ => DirectoryRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn store_profile(&self, profile: &Profile) -> DirectoryRepositoryResult<()> {
        let profile_id = profile.id();
        let new_row = profile_to_new_row(profile);

        self.run_blocking(move |connection| {
            diesel::insert_into(profiles::table)
                .values(&new_row)
                .execute(connection)
                .map_err(|err| match err {
                    DieselError::DatabaseError(DatabaseErrorKind::UniqueViolation, _) => {
                        DirectoryRepositoryError::DuplicateProfile(profile_id)
                    }
                    _ => DirectoryRepositoryError::persistence(err),
                })?;
            Ok(())
        })
        .await
    }

    async fn update_profile(&self, profile: &Profile) -> DirectoryRepositoryResult<()> {
        let profile_id = profile.id();
        let department_id = profile.department().map(DepartmentId::into_inner);
        let display_name = profile.display_name().to_owned();
        let updated_at = profile.updated_at();

        self.run_blocking(move |connection| {
            let affected = diesel::update(
                profiles::table.filter(profiles::id.eq(profile_id.into_inner())),
            )
            .set((
                profiles::display_name.eq(display_name),
                profiles::department_id.eq(department_id),
                profiles::updated_at.eq(updated_at),
            ))
            .execute(connection)
            .map_err(DirectoryRepositoryError::persistence)?;

            if affected == 0 {
                return Err(DirectoryRepositoryError::ProfileNotFound(profile_id));
            }
            Ok(())
        })
        .await
    }

    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> DirectoryRepositoryResult<Option<Department>> {
        self.run_blocking(move |connection| {
            let row = departamentos::table
                .filter(departamentos::id.eq(id.into_inner()))
                .select(DepartmentRow::as_select())
                .first::<DepartmentRow>(connection)
                .optional()
                .map_err(DirectoryRepositoryError::persistence)?;
            Ok(row.map(row_to_department))
        })
        .await
    }

    async fn find_profile(&self, id: ProfileId) -> DirectoryRepositoryResult<Option<Profile>> {
        self.run_blocking(move |connection| {
            let row = profiles::table
                .filter(profiles::id.eq(id.into_inner()))
                .select(ProfileRow::as_select())
                .first::<ProfileRow>(connection)
                .optional()
                .map_err(DirectoryRepositoryError::persistence)?;
            Ok(row.map(row_to_profile))
        })
        .await
    }

    async fn list_departments(&self) -> DirectoryRepositoryResult<Vec<Department>> {
        self.run_blocking(move |connection| {
            let rows = departamentos::table
                .order(departamentos::name.asc())
                .select(DepartmentRow::as_select())
                .load::<DepartmentRow>(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_department).collect())
        })
        .await
    }

    async fn list_profiles(&self) -> DirectoryRepositoryResult<Vec<Profile>> {
        self.run_blocking(move |connection| {
            let rows = profiles::table
                .order(profiles::display_name.asc())
                .select(ProfileRow::as_select())
                .load::<ProfileRow>(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_profile).collect())
        })
        .await
    }

    async fn list_profiles_in(
        &self,
        department: DepartmentId,
    ) -> DirectoryRepositoryResult<Vec<Profile>> {
        self.run_blocking(move |connection| {
            let rows = profiles::table
                .filter(profiles::department_id.eq(department.into_inner()))
                .select(ProfileRow::as_select())
                .load::<ProfileRow>(connection)
                .map_err(DirectoryRepositoryError::persistence)?;
            Ok(rows.into_iter().map(row_to_profile).collect())
        })
        .await
    }

    async fn delete_department(&self, id: DepartmentId) -> DirectoryRepositoryResult<()> {
        self.run_blocking(move |connection| {
            let affected = diesel::delete(
                departamentos::table.filter(departamentos::id.eq(id.into_inner())),
            )
            .execute(connection)
            .map_err(DirectoryRepositoryError::persistence)?;

            if affected == 0 {
                return Err(DirectoryRepositoryError::DepartmentNotFound(id));
            }
            Ok(())
        })
        .await
    }
}

fn department_to_new_row(department: &Department) -> NewDepartmentRow {
    NewDepartmentRow {
        id: department.id().into_inner(),
        name: department.name().to_owned(),
        description: department.description().map(str::to_owned),
        color: department.color().map(str::to_owned),
        created_at: department.created_at(),
        updated_at: department.updated_at(),
    }
}

fn profile_to_new_row(profile: &Profile) -> NewProfileRow {
    NewProfileRow {
        id: profile.id().into_inner(),
        display_name: profile.display_name().to_owned(),
        department_id: profile.department().map(DepartmentId::into_inner),
        created_at: profile.created_at(),
        updated_at: profile.updated_at(),
    }
}

fn row_to_department(row: DepartmentRow) -> Department {
    Department::from_persisted(PersistedDepartmentData {
        id: DepartmentId::from_uuid(row.id),
        name: row.name,
        description: row.description,
        color: row.color,
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}

fn row_to_profile(row: ProfileRow) -> Profile {
    Profile::from_persisted(PersistedProfileData {
        id: ProfileId::from_uuid(row.id),
        display_name: row.display_name,
        department: row.department_id.map(DepartmentId::from_uuid),
        created_at: row.created_at,
        updated_at: row.updated_at,
    })
}
