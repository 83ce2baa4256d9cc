use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

use crate::store::StoreError;

/// Application-specific error types.
///
/// The two storage variants exist because the read and write surfaces expose
/// different failure envelopes: GET endpoints answer `{"error": ...}` while
/// POST endpoints answer `{"success": false, "message": ...}`.
#[derive(Debug)]
pub enum AppError {
    /// Request failed field-presence validation (client's fault).
    Validation(String),
    /// Reading a collection failed while serving a GET endpoint.
    FetchFailed(StoreError),
    /// Persisting a submission failed while serving a POST endpoint.
    SubmissionFailed(StoreError),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Validation(msg) => write!(f, "Validation error: {}", msg),
            AppError::FetchFailed(e) => write!(f, "Fetch failed: {}", e),
            AppError::SubmissionFailed(e) => write!(f, "Submission failed: {}", e),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Storage failures are logged server-side with full detail and surfaced
    /// to the caller only as a generic message.
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msg) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "message": msg })),
            )
                .into_response(),
            AppError::FetchFailed(e) => {
                tracing::error!("Storage read error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Failed to fetch data" })),
                )
                    .into_response()
            }
            AppError::SubmissionFailed(e) => {
                tracing::error!("Storage write error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "message": "Error processing request" })),
                )
                    .into_response()
            }
        }
    }
}
