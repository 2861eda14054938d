//! Query parameters and envelopes exchanged by the client API endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::forms::FieldMessage;

/// Paging and ordering parameters shared by every listing endpoint.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageParams {
    /// Zero-based page index; defaults to the first page.
    pub page: Option<usize>,
    /// Page size; defaults to [`crate::repository::DEFAULT_LINES_PER_PAGE`].
    pub lines_per_page: Option<usize>,
    /// `ASC` or `DESC`.
    pub direction: Option<String>,
    /// JSON name of the field to order by.
    pub order_by: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct IncomeParams {
    pub income: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CpfParams {
    #[serde(default)]
    pub cpf: String,
}

/// Body of every error response.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    pub timestamp: DateTime<Utc>,
    pub status: u16,
    pub error: String,
    pub message: String,
    pub path: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub errors: Vec<FieldMessage>,
}

impl ErrorResponse {
    pub fn new(
        status: u16,
        error: impl Into<String>,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: Utc::now(),
            status,
            error: error.into(),
            message: message.into(),
            path: path.into(),
            errors: Vec::new(),
        }
    }

    pub fn with_errors(mut self, errors: Vec<FieldMessage>) -> Self {
        self.errors = errors;
        self
    }
}
