//! HTTP error handling and response types.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::models::SelectionError;

/// API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }
}

/// Application error type for HTTP handlers.
#[derive(Debug)]
pub enum AppError {
    /// Invalid request (malformed query parameters or range bounds)
    BadRequest(String),
    /// A selector value that cannot be resolved against the dataset. The
    /// affected chart fails to update; the other chart is untouched.
    Selection(SelectionError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error) = match self {
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ApiError::new("BAD_REQUEST", msg)),
            AppError::Selection(e) => (
                StatusCode::BAD_REQUEST,
                ApiError::new("SELECTION_ERROR", e.to_string()),
            ),
        };

        (status, Json(error)).into_response()
    }
}

impl From<SelectionError> for AppError {
    fn from(err: SelectionError) -> Self {
        AppError::Selection(err)
    }
}
