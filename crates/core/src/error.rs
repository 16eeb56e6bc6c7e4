use crate::types::EntityId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Bad or missing input. Never worth retrying.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A category with the same name already exists.
    #[error("Duplicate name: {0}")]
    DuplicateName(String),

    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: EntityId },

    /// The backing store could not be reached. The only retryable kind.
    #[error("Storage unavailable: {0}")]
    StorageUnavailable(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    /// Whether a caller may retry the failed call with backoff.
    pub fn is_retryable(&self) -> bool {
        matches!(self, Self::StorageUnavailable(_))
    }
}

pub type CoreResult<T> = Result<T, CoreError>;
