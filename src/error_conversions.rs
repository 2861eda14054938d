//! Error conversion glue between layers.
//!
//! The domain layer must not depend on service/repository error types, so the
//! conversions from [`TypeConstraintError`] live here.

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        match val {
            // No record can carry an id outside the positive i32 range.
            TypeConstraintError::NonPositiveId | TypeConstraintError::IdOutOfRange => {
                ServiceError::NotFound
            }
            other => ServiceError::TypeConstraint(other.to_string()),
        }
    }
}

impl From<TypeConstraintError> for RepositoryError {
    fn from(val: TypeConstraintError) -> Self {
        RepositoryError::ValidationError(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::Validation(errors) => ServiceError::Validation(
                crate::forms::field_messages(&errors),
            ),
            FormError::Constraint(err) => ServiceError::from(err),
        }
    }
}
