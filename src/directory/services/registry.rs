//! Service layer for department and profile administration.

use crate::directory::{
    domain::{Department, DepartmentId, DirectoryDomainError, Profile, ProfileId},
    ports::{DirectoryRepository, DirectoryRepositoryError},
};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;

/// Service-level errors for directory administration.
#[derive(Debug, Error)]
pub enum DirectoryServiceError {
    /// Domain validation failed.
    #[error(transparent)]
    Domain(#[from] DirectoryDomainError),

    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] DirectoryRepositoryError),

    /// The department still has members and cannot be removed.
    #[error("department {id} still has {members} member(s) and cannot be removed")]
    DepartmentInUse {
        /// The department that was targeted for removal.
        id: DepartmentId,
        /// How many profiles still reference it.
        members: usize,
    },

    /// The referenced department does not exist.
    #[error("unknown department: {0}")]
    UnknownDepartment(DepartmentId),
}

/// Result type for directory service operations.
pub type DirectoryServiceResult<T> = Result<T, DirectoryServiceError>;

/// Department and profile administration service.
#[derive(Clone)]
pub struct DirectoryService<R, C>
where
    R: DirectoryRepository,
    C: Clock + Send + Sync,
{
    repository: Arc<R>,
    clock: Arc<C>,
}

impl<R, C> DirectoryService<R, C>
where
    R: DirectoryRepository,
    C: Clock + Send + Sync,
{
    /// Creates a new directory service.
    #[must_use]
    pub const fn new(repository: Arc<R>, clock: Arc<C>) -> Self {
        Self { repository, clock }
    }

    /// Creates and stores a department.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError`] when validation fails or the
    /// repository rejects persistence.
    pub async fn create_department(
        &self,
        name: impl Into<String> + Send,
        description: Option<String>,
        color: Option<String>,
    ) -> DirectoryServiceResult<Department> {
        let mut department = Department::new(name, &*self.clock)?;
        if let Some(description) = description {
            department = department.with_description(description);
        }
        if let Some(color) = color {
            department = department.with_color(color);
        }
        self.repository.store_department(&department).await?;
        Ok(department)
    }

    /// Creates and stores a profile, optionally placing it in a department.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::UnknownDepartment`] when the target
    /// department does not exist.
    pub async fn create_profile(
        &self,
        display_name: impl Into<String> + Send,
        department: Option<DepartmentId>,
    ) -> DirectoryServiceResult<Profile> {
        let mut profile = Profile::new(display_name, &*self.clock)?;
        if let Some(department_id) = department {
            self.ensure_department_exists(department_id).await?;
            profile.assign_department(Some(department_id), &*self.clock);
        }
        self.repository.store_profile(&profile).await?;
        Ok(profile)
    }

    /// Moves a profile into the given department, or clears the assignment.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::UnknownDepartment`] when the target
    /// department does not exist and
    /// [`DirectoryRepositoryError::ProfileNotFound`] when the profile is
    /// missing.
    pub async fn assign_department(
        &self,
        profile_id: ProfileId,
        department: Option<DepartmentId>,
    ) -> DirectoryServiceResult<Profile> {
        if let Some(department_id) = department {
            self.ensure_department_exists(department_id).await?;
        }
        let mut profile = self
            .repository
            .find_profile(profile_id)
            .await?
            .ok_or(DirectoryRepositoryError::ProfileNotFound(profile_id))?;
        profile.assign_department(department, &*self.clock);
        self.repository.update_profile(&profile).await?;
        Ok(profile)
    }

    /// Removes a department, refusing while any profile still references it.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::DepartmentInUse`] while members
    /// remain.
    pub async fn delete_department(&self, id: DepartmentId) -> DirectoryServiceResult<()> {
        let members = self.repository.list_profiles_in(id).await?;
        if !members.is_empty() {
            return Err(DirectoryServiceError::DepartmentInUse {
                id,
                members: members.len(),
            });
        }
        self.repository.delete_department(id).await?;
        Ok(())
    }

    /// Returns all departments.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when the lookup fails.
    pub async fn list_departments(&self) -> DirectoryServiceResult<Vec<Department>> {
        Ok(self.repository.list_departments().await?)
    }

    /// Returns all profiles.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryServiceError::Repository`] when the lookup fails.
    pub async fn list_profiles(&self) -> DirectoryServiceResult<Vec<Profile>> {
        Ok(self.repository.list_profiles().await?)
    }

    async fn ensure_department_exists(&self, id: DepartmentId) -> DirectoryServiceResult<()> {
        self.repository
            .find_department(id)
            .await?
            .map(|_| ())
            .ok_or(DirectoryServiceError::UnknownDepartment(id))
    }
}
