//! Request DTOs for the task API.
//!
//! Incoming request bodies carry the title only; ids are assigned by the
//! service and the completion status always starts as `false`.

use serde::Deserialize;

/// Request DTO for creating a task.
///
/// # Example JSON
///
/// ```json
/// {
///     "title": "buy milk"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateTaskRequest {
    /// The title of the new task.
    pub title: String,
}

/// Request DTO for updating a task's title.
///
/// Only the title can be changed; id and status are immutable through
/// this endpoint.
///
/// # Example JSON
///
/// ```json
/// {
///     "title": "buy oat milk"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UpdateTaskRequest {
    /// The replacement title.
    pub title: String,
}
