//! Request payload definitions backing the client routes.

use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

use crate::domain::types::TypeConstraintError;

pub mod client;

#[derive(Debug, Error)]
/// Errors that can occur when processing request payloads.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error(transparent)]
    Constraint(#[from] TypeConstraintError),
}

/// Single rule violation reported back to the caller.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FieldMessage {
    pub field_name: String,
    pub message: String,
}

/// Flattens `validator` errors into per-field messages ordered by field name.
pub fn field_messages(errors: &ValidationErrors) -> Vec<FieldMessage> {
    let mut messages: Vec<FieldMessage> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errors)| {
            let field = field.to_string();
            errors.iter().map(move |error| FieldMessage {
                field_name: field.clone(),
                message: error
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| format!("invalid value ({})", error.code)),
            })
        })
        .collect();
    messages.sort_by(|a, b| a.field_name.cmp(&b.field_name));
    messages
}
