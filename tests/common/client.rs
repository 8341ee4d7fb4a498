//! HTTP client wrapper for integration tests.

use reqwest::{Client, Response, StatusCode};
use serde::{Deserialize, Serialize, de::DeserializeOwned};
use std::time::Duration;

#[derive(Clone)]
pub struct TaskApiClient {
    client: Client,
    base_url: String,
}

impl TaskApiClient {
    pub fn new(base_url: &str) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.to_string(),
        }
    }

    // Health check
    pub async fn health(&self) -> ApiResult<HealthDto> {
        self.get("/health").await
    }

    // Task operations
    pub async fn list_tasks(&self) -> ApiResult<Vec<TaskDto>> {
        self.get("/tasks").await
    }

    pub async fn create_task(&self, request: &CreateTaskDto) -> ApiResult<CreatedTaskDto> {
        self.post("/tasks", request).await
    }

    pub async fn update_task(&self, task_id: u64, request: &UpdateTaskDto) -> ApiResult<UpdateOutcomeDto> {
        self.put(&format!("/tasks/{task_id}"), request).await
    }

    pub async fn delete_task(&self, task_id: u64) -> ApiResult<DeleteOutcomeDto> {
        self.delete(&format!("/tasks/{task_id}")).await
    }

    // Internal helpers
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .client
            .get(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        parse_response(response).await
    }

    async fn post<T: DeserializeOwned, R: Serialize>(&self, path: &str, body: &R) -> ApiResult<T> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn put<T: DeserializeOwned, R: Serialize>(&self, path: &str, body: &R) -> ApiResult<T> {
        let response = self
            .client
            .put(format!("{}{}", self.base_url, path))
            .json(body)
            .send()
            .await?;
        parse_response(response).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> ApiResult<T> {
        let response = self
            .client
            .delete(format!("{}{}", self.base_url, path))
            .send()
            .await?;
        parse_response(response).await
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug)]
pub enum ApiError {
    Http(reqwest::Error),
    Api { status: StatusCode, code: String },
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err)
    }
}

async fn parse_response<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
    let status = response.status();

    if status.is_success() {
        response.json().await.map_err(ApiError::Http)
    } else {
        let error_body: ApiErrorBody = response.json().await.map_err(ApiError::Http)?;
        Err(ApiError::Api {
            status,
            code: error_body.code,
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    code: String,
}

// DTO types for tests

#[derive(Debug, Clone, Serialize)]
pub struct CreateTaskDto {
    pub title: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct UpdateTaskDto {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct HealthDto {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TaskDto {
    pub id: u64,
    pub title: String,
    pub status: bool,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct CreatedTaskDto {
    pub id: u64,
    pub title: String,
    pub status: bool,
    pub llm_response: Option<serde_json::Value>,
}

/// A 200-status update outcome: either the updated task or the
/// not-found error payload.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum UpdateOutcomeDto {
    Updated(TaskDto),
    NotFound { error: String },
}

#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct DeleteOutcomeDto {
    pub message: String,
}
