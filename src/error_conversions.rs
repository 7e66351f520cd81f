//! Error conversion glue between the domain and the outer layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions live here instead of next to [`TypeConstraintError`].

use crate::domain::types::TypeConstraintError;
use crate::pagination::PageRequestError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<PageRequestError> for ServiceError {
    fn from(val: PageRequestError) -> Self {
        ServiceError::InvalidInput(val.to_string())
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}
