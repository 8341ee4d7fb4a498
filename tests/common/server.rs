//! In-process server spawner for integration tests.
//!
//! Binds the real router on an ephemeral port, backed by a task file in a
//! scratch directory, so each test gets an isolated service instance.

use std::path::PathBuf;
use std::sync::Arc;

use task_tracker::api::routes::create_router;
use task_tracker::infrastructure::{AppDependencies, CompletionClient, JsonFileTaskStore};
use tempfile::TempDir;
use tokio::net::TcpListener;

use super::client::TaskApiClient;

/// A running service instance plus handles to poke at its state.
pub struct TestApp {
    /// Client pointed at the spawned server.
    pub client: TaskApiClient,
    /// Base URL of the spawned server.
    pub base_url: String,
    /// Path of the backing task file.
    pub tasks_file: PathBuf,
    // Dropping the TempDir removes the scratch task file.
    _dir: TempDir,
}

impl TestApp {
    /// Raw contents of the backing task file, or `None` if it was never
    /// written.
    pub async fn raw_tasks_file(&self) -> Option<String> {
        tokio::fs::read_to_string(&self.tasks_file).await.ok()
    }
}

/// Spawns the service without a completion client.
pub async fn spawn_app() -> TestApp {
    spawn_app_with_completion(None).await
}

/// Spawns the service with the given completion client injected.
pub async fn spawn_app_with_completion(
    completion_client: Option<Arc<dyn CompletionClient>>,
) -> TestApp {
    let dir = TempDir::new().expect("failed to create scratch directory");
    let tasks_file = dir.path().join("tasks.json");

    let store = Arc::new(JsonFileTaskStore::new(&tasks_file));
    let deps = AppDependencies::new(store, completion_client, "test-model");
    let app = create_router(deps);

    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .expect("failed to bind ephemeral port");
    let address = listener.local_addr().expect("listener has no local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("server crashed");
    });

    let base_url = format!("http://{address}");
    TestApp {
        client: TaskApiClient::new(&base_url),
        base_url,
        tasks_file,
        _dir: dir,
    }
}
