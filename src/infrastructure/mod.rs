//! Infrastructure layer for the task tracker.
//!
//! This module contains the service's external-facing concerns:
//!
//! - **Configuration**: settings loaded from environment variables
//! - **Storage**: the JSON-file task store behind the [`TaskStore`] trait
//! - **Completion**: the HTTP client for the hosted language-model endpoint
//! - **Dependencies**: the injection container handed to axum as state
//!
//! All external dependencies are abstracted behind traits so handlers can
//! be tested with in-memory and stub implementations.

pub mod completion;
pub mod config;
pub mod dependencies;
pub mod storage;

pub use completion::{
    ChatMessage, CompletionClient, CompletionError, HttpCompletionClient, explain_task_prompt,
};
pub use config::{AppConfig, ConfigError};
pub use dependencies::AppDependencies;
pub use storage::{InMemoryTaskStore, JsonFileTaskStore, StorageError, TaskStore};
