//! Error handling for the API layer.
//!
//! Infrastructure failures are mapped to a uniform JSON error body with an
//! appropriate HTTP status:
//!
//! | Failure | HTTP Status | Error Code |
//! |---------|-------------|------------|
//! | Storage IO / malformed file | 500 | `STORAGE_ERROR` |
//! | Completion endpoint failure | 502 | `COMPLETION_FAILED` |
//!
//! Update-on-missing-id is deliberately NOT routed through here: that case
//! answers 200 with `{"error": "Task not found"}` (see
//! [`UpdateTaskResponse`](crate::api::dto::UpdateTaskResponse)).

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::infrastructure::completion::CompletionError;
use crate::infrastructure::storage::StorageError;

/// API error body.
///
/// # Example JSON
///
/// ```json
/// {
///     "code": "STORAGE_ERROR",
///     "message": "Failed to read the task list",
///     "details": {
///         "error": "..."
///     }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApiError {
    /// A machine-readable error code.
    pub code: String,
    /// A human-readable error message.
    pub message: String,
    /// Optional additional error details.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl ApiError {
    /// Creates a new `ApiError` without details.
    #[must_use]
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new `ApiError` with details.
    #[must_use]
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: serde_json::Value,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details),
        }
    }
}

/// Response wrapper that pairs an HTTP status code with an [`ApiError`].
#[derive(Debug, Clone)]
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl ApiErrorResponse {
    /// Creates a new `ApiErrorResponse`.
    #[must_use]
    pub const fn new(status: StatusCode, error: ApiError) -> Self {
        Self { status, error }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

// =============================================================================
// Error Conversion Functions
// =============================================================================

/// Maps a storage failure to a 500 response.
///
/// Covers both IO failures and a malformed persisted file; in either case
/// the request aborts rather than operating on a partial task list.
#[must_use]
pub fn storage_error_response(error: &StorageError, operation: &str) -> ApiErrorResponse {
    tracing::error!(%error, operation, "task storage failed");

    ApiErrorResponse::new(
        StatusCode::INTERNAL_SERVER_ERROR,
        ApiError::with_details(
            "STORAGE_ERROR",
            format!("Failed to {operation} the task list"),
            serde_json::json!({ "error": error.to_string() }),
        ),
    )
}

/// Maps a completion endpoint failure to a 502 response.
///
/// The task has already been persisted when the completion call runs, so
/// the created id is included in the details for the client to recover.
#[must_use]
pub fn completion_error_response(error: &CompletionError, task_id: u64) -> ApiErrorResponse {
    tracing::error!(%error, task_id, "completion endpoint call failed");

    ApiErrorResponse::new(
        StatusCode::BAD_GATEWAY,
        ApiError::with_details(
            "COMPLETION_FAILED",
            "The completion endpoint could not be reached; the task was created",
            serde_json::json!({
                "error": error.to_string(),
                "task_id": task_id
            }),
        ),
    )
}
