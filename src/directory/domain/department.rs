//! Department aggregate.

use super::{DepartmentId, DirectoryDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A department grouping member profiles, shown as a coloured badge in lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    id: DepartmentId,
    name: String,
    description: Option<String>,
    color: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

/// Parameter object for reconstructing a persisted department.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersistedDepartmentData {
    /// Persisted department identifier.
    pub id: DepartmentId,
    /// Persisted department name.
    pub name: String,
    /// Persisted description, if any.
    pub description: Option<String>,
    /// Persisted display colour, if any.
    pub color: Option<String>,
    /// Persisted creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Persisted last-update timestamp.
    pub updated_at: DateTime<Utc>,
}

impl Department {
    /// Creates a new department with a trimmed, non-empty name.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryDomainError::EmptyDepartmentName`] when the name is
    /// empty after trimming.
    pub fn new(name: impl Into<String>, clock: &impl Clock) -> Result<Self, DirectoryDomainError> {
        let raw: String = name.into();
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(DirectoryDomainError::EmptyDepartmentName);
        }
        let timestamp = clock.utc();
        Ok(Self {
            id: DepartmentId::new(),
            name: trimmed.to_owned(),
            description: None,
            color: None,
            created_at: timestamp,
            updated_at: timestamp,
        })
    }

    /// Reconstructs a department from persisted storage.
    #[must_use]
    pub fn from_persisted(data: PersistedDepartmentData) -> Self {
        Self {
            id: data.id,
            name: data.name,
            description: data.description,
            color: data.color,
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

    /// Sets the display colour.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    /// Returns the department identifier.
    #[must_use]
    pub const fn id(&self) -> DepartmentId {
        self.id
    }

    /// Returns the department name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description, if any.
    #[must_use]
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    /// Returns the display colour, if any.
    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
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
}
