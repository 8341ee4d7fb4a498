//! Task storage abstraction.
//!
//! The task list is persisted as a single JSON array; every mutation reads
//! the full list, rewrites it in memory, and writes the full list back.
//!
//! # Design
//!
//! - **Trait-based abstraction**: [`TaskStore`] allows different backends
//!   (JSON file in production, in-memory for tests) and keeps handlers
//!   testable without real disk IO.
//! - **Whole-file rewrite**: no partial writes, no locking. Two concurrent
//!   writers race and the last `save` wins; callers accept that trade-off.
//!
//! # Example
//!
//! ```rust,ignore
//! use task_tracker::infrastructure::{JsonFileTaskStore, TaskStore};
//!
//! let store = JsonFileTaskStore::new("tasks.json");
//! let tasks = store.load().await?;
//! ```

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::Task;

/// Errors that can occur when loading or saving the task list.
#[derive(Debug, Error)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    #[error("task file IO failed: {0}")]
    Io(#[from] std::io::Error),
    /// The backing file exists but does not contain a valid task array.
    #[error("task file is malformed: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Storage contract for the task list.
///
/// `load` returns the full list; `save` replaces it wholesale. There is no
/// finer-grained operation on purpose: the backing representation is a
/// single JSON document.
#[async_trait]
pub trait TaskStore: Send + Sync {
    /// Loads the full task list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing storage cannot be read,
    /// or [`StorageError::Malformed`] if its contents do not deserialize
    /// into a task array.
    async fn load(&self) -> Result<Vec<Task>, StorageError>;

    /// Replaces the full task list.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Io`] if the backing storage cannot be
    /// written, or [`StorageError::Malformed`] if serialization fails.
    async fn save(&self, tasks: &[Task]) -> Result<(), StorageError>;
}

/// File-backed task store.
///
/// Persists the task list as pretty-printed JSON. A missing file reads as
/// an empty list; a malformed file is an error (the contents are never
/// silently discarded). Non-ASCII titles are written as-is — serde_json
/// does not escape characters outside ASCII.
///
/// No locking is performed: concurrent writers produce a lost-update race
/// where the last `save` wins.
#[derive(Debug, Clone)]
pub struct JsonFileTaskStore {
    path: PathBuf,
}

impl JsonFileTaskStore {
    /// Creates a store backed by the given file path.
    ///
    /// The file is not touched until the first `save`.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// The path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl TaskStore for JsonFileTaskStore {
    async fn load(&self) -> Result<Vec<Task>, StorageError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Vec::new()),
            Err(error) => Err(StorageError::Io(error)),
        }
    }

    async fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let json = serde_json::to_vec_pretty(tasks)?;
        tokio::fs::write(&self.path, json).await?;
        Ok(())
    }
}

/// In-memory task store for tests.
///
/// Mirrors the file store's contract without touching disk. The list is
/// held behind a mutex so the store can be shared across handler tasks.
#[derive(Debug, Default)]
pub struct InMemoryTaskStore {
    tasks: Mutex<Vec<Task>>,
}

impl InMemoryTaskStore {
    /// Creates an empty in-memory store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with the given tasks.
    #[must_use]
    pub fn with_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks: Mutex::new(tasks),
        }
    }
}

#[async_trait]
impl TaskStore for InMemoryTaskStore {
    async fn load(&self) -> Result<Vec<Task>, StorageError> {
        let tasks = self
            .tasks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        Ok(tasks.clone())
    }

    async fn save(&self, tasks: &[Task]) -> Result<(), StorageError> {
        let mut guard = self
            .tasks
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner);
        *guard = tasks.to_vec();
        Ok(())
    }
}
