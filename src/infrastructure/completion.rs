//! Completion endpoint client.
//!
//! Task creation forwards the new title to a hosted language-model
//! inference service, which replies with an explanation of how to tackle
//! the task. The wire format is fixed by the remote service:
//!
//! ```text
//! POST {base_url}{model}
//! Authorization: Bearer <token>
//!
//! {"messages": [{"role": "...", "content": "..."}, ...]}
//! ```
//!
//! The response body is an opaque JSON object passed through to the API
//! client verbatim.
//!
//! # Error policy
//!
//! Transport failures, non-2xx statuses, and undecodable bodies all
//! surface as a [`CompletionError`] rather than being silently returned as
//! the remote's error body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One message of the chat prompt sent to the completion endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// The speaker role ("system" or "user").
    pub role: String,
    /// The message text.
    pub content: String,
}

impl ChatMessage {
    /// Creates a system-role message.
    #[must_use]
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    /// Creates a user-role message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// Errors that can occur when calling the completion endpoint.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// The request could not be sent or the connection failed mid-flight.
    #[error("completion request failed: {0}")]
    Transport(#[from] reqwest::Error),
    /// The endpoint answered with a non-success status.
    #[error("completion endpoint returned status {status}")]
    Status {
        /// The HTTP status the endpoint returned.
        status: StatusCode,
    },
}

/// Contract for the completion endpoint.
///
/// Abstracted behind a trait so handler tests can substitute a stub
/// instead of a live inference service.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Runs the given model over the chat messages and returns the parsed
    /// response body verbatim.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Transport`] if the request cannot be
    /// completed or the body is not valid JSON, and
    /// [`CompletionError::Status`] if the endpoint answers with a non-2xx
    /// status.
    async fn run(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<serde_json::Value, CompletionError>;
}

/// Request body for the completion endpoint.
#[derive(Debug, Serialize)]
struct CompletionRequest<'a> {
    messages: &'a [ChatMessage],
}

/// HTTP implementation of [`CompletionClient`].
#[derive(Debug, Clone)]
pub struct HttpCompletionClient {
    client: reqwest::Client,
    base_url: String,
    api_token: String,
}

impl HttpCompletionClient {
    /// Creates a client for the given endpoint.
    ///
    /// `base_url` is the prefix the model name is appended to; `timeout`
    /// bounds the full request round-trip so a hung remote cannot stall a
    /// handler indefinitely.
    ///
    /// # Errors
    ///
    /// Returns [`CompletionError::Transport`] if the underlying HTTP
    /// client cannot be constructed.
    pub fn new(
        base_url: impl Into<String>,
        api_token: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url: base_url.into(),
            api_token: api_token.into(),
        })
    }
}

#[async_trait]
impl CompletionClient for HttpCompletionClient {
    async fn run(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<serde_json::Value, CompletionError> {
        let url = format!("{}{model}", self.base_url);

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_token)
            .json(&CompletionRequest { messages })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(CompletionError::Status { status });
        }

        Ok(response.json().await?)
    }
}

/// Builds the fixed prompt pair sent when a task is created.
///
/// System prompt plus a user prompt asking the model to explain how to
/// solve the newly created task.
#[must_use]
pub fn explain_task_prompt(title: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system("You are a helpful assistant that explains how to solve tasks."),
        ChatMessage::user(format!("Explain how to solve the task: {title}")),
    ]
}
