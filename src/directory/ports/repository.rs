//! Repository port for profile and department persistence.

use crate::directory::domain::{Department, DepartmentId, Profile, ProfileId};
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for directory repository operations.
pub type DirectoryRepositoryResult<T> = Result<T, DirectoryRepositoryError>;

/// Profile and department persistence contract.
#[async_trait]
pub trait DirectoryRepository: Send + Sync {
    /// Stores a new department.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateDepartment`] when the
    /// department ID already exists.
    async fn store_department(&self, department: &Department) -> DirectoryRepositoryResult<()>;

    /// Stores a new profile.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DuplicateProfile`] when the
    /// profile ID already exists.
    async fn store_profile(&self, profile: &Profile) -> DirectoryRepositoryResult<()>;

    /// Persists changes to an existing profile (department assignment,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::ProfileNotFound`] when the profile
    /// does not exist.
    async fn update_profile(&self, profile: &Profile) -> DirectoryRepositoryResult<()>;

    /// Finds a department by identifier.
    ///
    /// Returns `None` when the department does not exist.
    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> DirectoryRepositoryResult<Option<Department>>;

    /// Finds a profile by identifier.
    ///
    /// Returns `None` when the profile does not exist.
    async fn find_profile(&self, id: ProfileId) -> DirectoryRepositoryResult<Option<Profile>>;

    /// Returns all departments.
    async fn list_departments(&self) -> DirectoryRepositoryResult<Vec<Department>>;

    /// Returns all profiles.
    async fn list_profiles(&self) -> DirectoryRepositoryResult<Vec<Profile>>;

    /// Returns the profiles currently assigned to the given department.
    async fn list_profiles_in(
        &self,
        department: DepartmentId,
    ) -> DirectoryRepositoryResult<Vec<Profile>>;

    /// Removes a department.
    ///
    /// Callers are responsible for checking membership first; this operation
    /// performs no referential guard of its own.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryRepositoryError::DepartmentNotFound`] when the
    /// department does not exist.
    async fn delete_department(&self, id: DepartmentId) -> DirectoryRepositoryResult<()>;
}

/// Errors returned by directory repository implementations.
#[derive(Debug, Clone, Error)]
pub enum DirectoryRepositoryError {
    /// A department with the same identifier already exists.
    #[error("duplicate department identifier: {0}")]
    DuplicateDepartment(DepartmentId),

    /// A profile with the same identifier already exists.
    #[error("duplicate profile identifier: {0}")]
    DuplicateProfile(ProfileId),

    /// The department was not found.
    #[error("department not found: {0}")]
    DepartmentNotFound(DepartmentId),

    /// The profile was not found.
    #[error("profile not found: {0}")]
    ProfileNotFound(ProfileId),

    /// The backend rejected the operation for authorization reasons.
    #[error("operation rejected by the backend: {0}")]
    Rejected(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl DirectoryRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }
}
