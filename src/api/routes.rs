//! Route configuration for the task API.
//!
//! # Routes
//!
//! | Method | Path | Handler | Description |
//! |--------|------|---------|-------------|
//! | GET | /tasks | `list_tasks` | List all tasks |
//! | POST | /tasks | `create_task` | Create a task |
//! | PUT | /tasks/{task_id} | `update_task` | Replace a task's title |
//! | DELETE | /tasks/{task_id} | `delete_task` | Delete a task |
//! | GET | /health | `health_check` | Health check |

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;

use crate::api::handlers::{create_task, delete_task, list_tasks, update_task};
use crate::infrastructure::AppDependencies;

/// Health check response.
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Service status ("healthy").
    pub status: String,
    /// Service version.
    pub version: String,
}

/// GET /health - Health check endpoint.
///
/// # Example Response
///
/// ```json
/// {
///     "status": "healthy",
///     "version": "0.1.0"
/// }
/// ```
#[allow(clippy::unused_async)]
pub async fn health_check(
    State(_dependencies): State<AppDependencies>,
) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    };
    (StatusCode::OK, Json(response))
}

/// Creates the axum router with all API routes.
///
/// # Arguments
///
/// * `dependencies` - The application dependencies (task store, optional
///   completion client)
pub fn create_router(dependencies: AppDependencies) -> Router {
    Router::new()
        // Task routes
        .route("/tasks", get(list_tasks).post(create_task))
        .route(
            "/tasks/{task_id}",
            axum::routing::put(update_task).delete(delete_task),
        )
        // Health check
        .route("/health", get(health_check))
        // Add state
        .with_state(dependencies)
}
