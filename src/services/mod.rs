//! Framework-agnostic operations invoked by the HTTP handlers.

use thiserror::Error;

use crate::forms::FieldMessage;
use crate::repository::errors::RepositoryError;

pub mod client;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Entity not found")]
    NotFound,

    #[error("Invalid payload")]
    Validation(Vec<FieldMessage>),

    #[error("{0}")]
    TypeConstraint(String),

    #[error("{0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<RepositoryError> for ServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound => ServiceError::NotFound,
            RepositoryError::ConstraintViolation(message) => ServiceError::BadRequest(message),
            other => ServiceError::Internal(other.to_string()),
        }
    }
}
