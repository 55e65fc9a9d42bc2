//! Repository port for recurring-template persistence.

use crate::board::domain::RecurringTaskId;
use crate::recurrence::domain::RecurringTask;
use async_trait::async_trait;
use std::sync::Arc;
use thiserror::Error;

/// Result type for template repository operations.
pub type RecurringTaskRepositoryResult<T> = Result<T, RecurringTaskRepositoryError>;

/// Recurring-template persistence contract.
#[async_trait]
pub trait RecurringTaskRepository: Send + Sync {
    /// Stores a new template.
    ///
    /// # Errors
    ///
    /// Returns [`RecurringTaskRepositoryError::DuplicateTemplate`] when the
    /// template ID already exists.
    async fn store(&self, template: &RecurringTask) -> RecurringTaskRepositoryResult<()>;

    /// Persists changes to an existing template (end date, last generation,
    /// timestamps).
    ///
    /// # Errors
    ///
    /// Returns [`RecurringTaskRepositoryError::NotFound`] when the template
    /// does not exist.
    async fn update(&self, template: &RecurringTask) -> RecurringTaskRepositoryResult<()>;

    /// Finds a template by identifier.
    ///
    /// Returns `None` when the template does not exist.
    async fn find_by_id(
        &self,
        id: RecurringTaskId,
    ) -> RecurringTaskRepositoryResult<Option<RecurringTask>>;

    /// Returns all templates.
    async fn list_all(&self) -> RecurringTaskRepositoryResult<Vec<RecurringTask>>;
}

/// Errors returned by template repository implementations.
#[derive(Debug, Clone, Error)]
pub enum RecurringTaskRepositoryError {
    /// A template with the same identifier already exists.
    #[error("duplicate template identifier: {0}")]
    DuplicateTemplate(RecurringTaskId),

    /// The template was not found.
    #[error("template not found: {0}")]
    NotFound(RecurringTaskId),

    /// Persisted data could not be reconstructed into domain types.
    #[error("invalid persisted data: {0}")]
    InvalidPersistedData(Arc<dyn std::error::Error + Send + Sync>),

    /// The backend rejected the operation for authorization reasons.
    #[error("operation rejected by the backend: {0}")]
    Rejected(String),

    /// Persistence-layer failure.
    #[error("persistence error: {0}")]
    Persistence(Arc<dyn std::error::Error + Send + Sync>),
}

impl RecurringTaskRepositoryError {
    /// Wraps a persistence error.
    pub fn persistence(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::Persistence(Arc::new(err))
    }

    /// Wraps a reconstruction error.
    pub fn invalid_persisted_data(err: impl std::error::Error + Send + Sync + 'static) -> Self {
        Self::InvalidPersistedData(Arc::new(err))
    }
}
