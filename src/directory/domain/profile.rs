//! Member profile aggregate.

use super::{DepartmentId, DirectoryDomainError, ProfileId};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A member profile used for assignee display data across the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    id: ProfileId,
    display_name: String,
    department: Option<DepartmentId>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedProfileData {
    /// Persisted profile identifier.
    pub id: ProfileId,
    /// Persisted display name.
    pub display_name: String,
    /// Persisted department reference, if any.
    pub department: Option<DepartmentId>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    /// Creates a new profile with a trimmed, non-empty display name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyDisplayName`] when the display
    /// name is empty after trimming.
    pub fn new(
        display_name: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, DirectoryDomainError> {
        let raw: String = display_name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyDisplayName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: ProfileId::new(),
            display_name: trimmed.to_owned(),
            department: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a profile from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedProfileData) -> Self {
        Self {
            id: data.id,
            display_name: data.display_name,
            department: data.department,
            created_at: data.created_at,
            updated_at: data.updated_at,
        }
    }

    /// Returns the profile identifier.
    #[must_use]
    pub const fn id(&self) -> ProfileId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Returns the department reference, if any.
    #[must_use]
    pub const fn department(&self) -> Option<DepartmentId> {
        self.department
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the last-update timestamp.
    #[must_use]
    pub const fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    /// Moves the profile into the given department (or out of any).
    pub fn assign_department(&mut self, department: Option<DepartmentId>, clock: &impl Clock) {
        self.department = department;
        self.updated_at = clock.utc();
    }
}
