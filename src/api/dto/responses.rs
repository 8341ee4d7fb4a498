//! Response DTOs for the task API.
//!
//! Responses mirror the persisted [`Task`] shape directly; the create
//! response additionally carries the completion endpoint's reply when the
//! remote call ran.

use serde::{Deserialize, Serialize};

use crate::domain::Task;

/// A task as returned by the API.
///
/// # Example JSON
///
/// ```json
/// {
///     "id": 1,
///     "title": "buy milk",
///     "status": false
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskResponse {
    /// The task's unique id.
    pub id: u64,
    /// The task title.
    pub title: String,
    /// The completion status.
    pub status: bool,
}

impl From<&Task> for TaskResponse {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id,
            title: task.title.clone(),
            status: task.status,
        }
    }
}

impl From<Task> for TaskResponse {
    fn from(task: Task) -> Self {
        Self {
            id: task.id,
            title: task.title,
            status: task.status,
        }
    }
}

/// Response DTO for a created task.
///
/// The task fields sit at the top level; `llm_response` carries the
/// completion endpoint's JSON verbatim and is omitted when no completion
/// client is configured.
///
/// # Example JSON
///
/// ```json
/// {
///     "id": 1,
///     "title": "buy milk",
///     "status": false,
///     "llm_response": {"result": {"response": "..."}}
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskResponse {
    /// The created task.
    #[serde(flatten)]
    pub task: TaskResponse,
    /// The completion endpoint's reply, passed through verbatim.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub llm_response: Option<serde_json::Value>,
}

/// Response DTO for an update.
///
/// Updating an id that does not exist is not an HTTP-level failure: the
/// endpoint answers 200 with an error payload instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum UpdateTaskResponse {
    /// The task was found and its title replaced.
    Updated(TaskResponse),
    /// No task with the requested id exists.
    NotFound {
        /// Fixed error message: "Task not found".
        error: String,
    },
}

impl UpdateTaskResponse {
    /// The not-found payload, `{"error": "Task not found"}`.
    #[must_use]
    pub fn not_found() -> Self {
        Self::NotFound {
            error: "Task not found".to_string(),
        }
    }
}

/// Response DTO for a delete.
///
/// Delete is idempotent: the same message is returned whether or not a
/// task was actually removed.
///
/// # Example JSON
///
/// ```json
/// {
///     "message": "Task deleted"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteTaskResponse {
    /// Fixed confirmation message: "Task deleted".
    pub message: String,
}

impl DeleteTaskResponse {
    /// The fixed deletion acknowledgement.
    #[must_use]
    pub fn deleted() -> Self {
        Self {
            message: "Task deleted".to_string(),
        }
    }
}
