use thiserror::Error;

use crate::repository::errors::RepositoryError;

/// Caller-facing failures of the client services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Resource not found")]
    NotFound,

    /// The operation would break referential integrity.
    #[error("Integrity violation: {0}")]
    Conflict(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Any other store failure, passed through as reported.
    #[error(transparent)]
    Database(RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ForeignKeyViolation(message) => ServiceError::Conflict(message),
            other => ServiceError::Database(other),
        }
    }
}
