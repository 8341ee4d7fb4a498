//! Task HTTP handlers.
//!
//! This module provides handlers for the four task operations:
//!
//! - `GET /tasks` - List all tasks
//! - `POST /tasks` - Create a task (optionally asking the completion
//!   endpoint how to solve it)
//! - `PUT /tasks/{task_id}` - Replace a task's title
//! - `DELETE /tasks/{task_id}` - Delete a task
//!
//! Every handler is stateless and self-contained: it loads the full task
//! list from the store, mutates it in memory, and writes the full list
//! back. Nothing is cached across requests; the file is the sole source
//! of truth. Concurrent writers therefore race (last save wins) — an
//! accepted property of the whole-file-rewrite design.

use axum::Json;
use axum::extract::{Path, State};

use crate::api::dto::requests::{CreateTaskRequest, UpdateTaskRequest};
use crate::api::dto::responses::{
    CreateTaskResponse, DeleteTaskResponse, TaskResponse, UpdateTaskResponse,
};
use crate::api::middleware::error_handler::{
    ApiErrorResponse, completion_error_response, storage_error_response,
};
use crate::domain::{Task, next_task_id};
use crate::infrastructure::AppDependencies;
use crate::infrastructure::completion::explain_task_prompt;

/// GET /tasks - List all tasks.
///
/// # Response
///
/// - `200 OK` - The full task list (possibly empty)
/// - `500 Internal Server Error` - The task file could not be read
pub async fn list_tasks(
    State(dependencies): State<AppDependencies>,
) -> Result<Json<Vec<TaskResponse>>, ApiErrorResponse> {
    let tasks = dependencies
        .task_store()
        .load()
        .await
        .map_err(|error| storage_error_response(&error, "load"))?;

    Ok(Json(tasks.into_iter().map(TaskResponse::from).collect()))
}

/// POST /tasks - Create a task.
///
/// Assigns the next id (max existing + 1, or 1 for an empty store),
/// persists the new task, and then — if a completion client is configured
/// — asks the completion endpoint to explain how to solve it. The task is
/// saved before the remote call, so a completion failure leaves the task
/// in place.
///
/// # Request Body
///
/// ```json
/// {
///     "title": "buy milk"
/// }
/// ```
///
/// # Response
///
/// - `200 OK` - The created task, with `llm_response` when the completion ran
/// - `500 Internal Server Error` - The task file could not be read or written
/// - `502 Bad Gateway` - The completion endpoint failed (task already created)
pub async fn create_task(
    State(dependencies): State<AppDependencies>,
    Json(request): Json<CreateTaskRequest>,
) -> Result<Json<CreateTaskResponse>, ApiErrorResponse> {
    // Step 1: Load the current list
    let mut tasks = dependencies
        .task_store()
        .load()
        .await
        .map_err(|error| storage_error_response(&error, "load"))?;

    // Step 2: Assign the next id and append
    let task = Task::new(next_task_id(&tasks), request.title);
    tasks.push(task.clone());

    // Step 3: Persist before the remote call
    dependencies
        .task_store()
        .save(&tasks)
        .await
        .map_err(|error| storage_error_response(&error, "save"))?;

    tracing::info!(task_id = task.id, "task created");

    // Step 4: Ask the completion endpoint how to solve the task
    let llm_response = match dependencies.completion_client() {
        Some(client) => Some(
            client
                .run(
                    dependencies.completion_model(),
                    &explain_task_prompt(&task.title),
                )
                .await
                .map_err(|error| completion_error_response(&error, task.id))?,
        ),
        None => None,
    };

    Ok(Json(CreateTaskResponse {
        task: TaskResponse::from(task),
        llm_response,
    }))
}

/// PUT /tasks/{task_id} - Replace a task's title.
///
/// Only the title changes; id and status stay as they are. A missing id
/// is not an HTTP-level failure: the endpoint answers 200 with
/// `{"error": "Task not found"}` and the file is left untouched.
///
/// # Request Body
///
/// ```json
/// {
///     "title": "buy oat milk"
/// }
/// ```
///
/// # Response
///
/// - `200 OK` - The updated task, or the not-found payload
/// - `500 Internal Server Error` - The task file could not be read or written
pub async fn update_task(
    State(dependencies): State<AppDependencies>,
    Path(task_id): Path<u64>,
    Json(request): Json<UpdateTaskRequest>,
) -> Result<Json<UpdateTaskResponse>, ApiErrorResponse> {
    let mut tasks = dependencies
        .task_store()
        .load()
        .await
        .map_err(|error| storage_error_response(&error, "load"))?;

    let Some(task) = tasks.iter_mut().find(|task| task.id == task_id) else {
        return Ok(Json(UpdateTaskResponse::not_found()));
    };

    task.title = request.title;
    let updated = TaskResponse::from(&*task);

    dependencies
        .task_store()
        .save(&tasks)
        .await
        .map_err(|error| storage_error_response(&error, "save"))?;

    tracing::info!(task_id, "task title updated");

    Ok(Json(UpdateTaskResponse::Updated(updated)))
}

/// DELETE /tasks/{task_id} - Delete a task.
///
/// Idempotent: answers `{"message": "Task deleted"}` whether or not a
/// task with that id existed. The file is only rewritten when something
/// was actually removed.
///
/// # Response
///
/// - `200 OK` - `{"message": "Task deleted"}` in all cases
/// - `500 Internal Server Error` - The task file could not be read or written
pub async fn delete_task(
    State(dependencies): State<AppDependencies>,
    Path(task_id): Path<u64>,
) -> Result<Json<DeleteTaskResponse>, ApiErrorResponse> {
    let tasks = dependencies
        .task_store()
        .load()
        .await
        .map_err(|error| storage_error_response(&error, "load"))?;

    let remaining: Vec<Task> = tasks
        .iter()
        .filter(|task| task.id != task_id)
        .cloned()
        .collect();

    if remaining.len() < tasks.len() {
        dependencies
            .task_store()
            .save(&remaining)
            .await
            .map_err(|error| storage_error_response(&error, "save"))?;

        tracing::info!(task_id, "task deleted");
    }

    Ok(Json(DeleteTaskResponse::deleted()))
}
