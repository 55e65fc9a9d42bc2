//! In-memory directory repository for tests and single-process deployments.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use crate::directory::{
    domain::{Department, DepartmentId, Profile, ProfileId},
    ports::{DirectoryRepository, DirectoryRepositoryError, DirectoryRepositoryResult},
};

/// Thread-safe in-memory directory repository.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDirectory {
    state: Arc<RwLock<DirectoryState>>,
}

#[derive(Debug, Default)]
struct DirectoryState {
    departments: HashMap<DepartmentId, Department>,
    profiles: HashMap<ProfileId, Profile>,
}

impl InMemoryDirectory {
    /// Creates an empty in-memory directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn lock_error(err: impl ToString) -> DirectoryRepositoryError {
    DirectoryRepositoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl DirectoryRepository for InMemoryDirectory {
    async fn store_department(&self, department: &Department) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.departments.contains_key(&department.id()) {
            return Err(DirectoryRepositoryError::DuplicateDepartment(
                department.id(),
            ));
        }
        state.departments.insert(department.id(), department.clone());
        Ok(())
    }

    async fn store_profile(&self, profile: &Profile) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.profiles.contains_key(&profile.id()) {
            return Err(DirectoryRepositoryError::DuplicateProfile(profile.id()));
        }
        state.profiles.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn update_profile(&self, profile: &Profile) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if !state.profiles.contains_key(&profile.id()) {
            return Err(DirectoryRepositoryError::ProfileNotFound(profile.id()));
        }
        state.profiles.insert(profile.id(), profile.clone());
        Ok(())
    }

    async fn find_department(
        &self,
        id: DepartmentId,
    ) -> DirectoryRepositoryResult<Option<Department>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.departments.get(&id).cloned())
    }

    async fn find_profile(&self, id: ProfileId) -> DirectoryRepositoryResult<Option<Profile>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.profiles.get(&id).cloned())
    }

    async fn list_departments(&self) -> DirectoryRepositoryResult<Vec<Department>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.departments.values().cloned().collect())
    }

    async fn list_profiles(&self) -> DirectoryRepositoryResult<Vec<Profile>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state.profiles.values().cloned().collect())
    }

    async fn list_profiles_in(
        &self,
        department: DepartmentId,
    ) -> DirectoryRepositoryResult<Vec<Profile>> {
        let state = self.state.read().map_err(lock_error)?;
        Ok(state
            .profiles
            .values()
            .filter(|profile| profile.department() == Some(department))
            .cloned()
            .collect())
    }

    async fn delete_department(&self, id: DepartmentId) -> DirectoryRepositoryResult<()> {
        let mut state = self.state.write().map_err(lock_error)?;
        if state.departments.remove(&id).is_none() {
            return Err(DirectoryRepositoryError::DepartmentNotFound(id));
        }
        Ok(())
    }
}
