//! Application dependency container.
//!
//! [`AppDependencies`] bundles the storage backend and the optional
//! completion client behind trait objects. It is cheap to clone and is
//! handed to axum as router state, so every handler receives the same
//! injected collaborators. Tests construct it with an in-memory store
//! and a stub completion client.

use std::sync::Arc;

use crate::infrastructure::completion::CompletionClient;
use crate::infrastructure::storage::TaskStore;

/// Shared application dependencies, used as axum state.
#[derive(Clone)]
pub struct AppDependencies {
    task_store: Arc<dyn TaskStore>,
    completion_client: Option<Arc<dyn CompletionClient>>,
    completion_model: String,
}

impl AppDependencies {
    /// Creates the dependency container.
    ///
    /// Pass `None` for `completion_client` to run without the remote
    /// completion call; create then returns the bare task.
    #[must_use]
    pub fn new(
        task_store: Arc<dyn TaskStore>,
        completion_client: Option<Arc<dyn CompletionClient>>,
        completion_model: impl Into<String>,
    ) -> Self {
        Self {
            task_store,
            completion_client,
            completion_model: completion_model.into(),
        }
    }

    /// The task storage backend.
    #[must_use]
    pub fn task_store(&self) -> &dyn TaskStore {
        self.task_store.as_ref()
    }

    /// The completion client, if one is configured.
    #[must_use]
    pub fn completion_client(&self) -> Option<&dyn CompletionClient> {
        self.completion_client.as_deref()
    }

    /// The model identifier passed to the completion endpoint.
    #[must_use]
    pub fn completion_model(&self) -> &str {
        &self.completion_model
    }
}

impl std::fmt::Debug for AppDependencies {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("AppDependencies")
            .field("completion_model", &self.completion_model)
            .field("completion_enabled", &self.completion_client.is_some())
            .finish_non_exhaustive()
    }
}
