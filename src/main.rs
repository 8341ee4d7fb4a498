//! Task Tracker Service Entry Point

use std::sync::Arc;
use std::time::Duration;

use task_tracker::api::routes::create_router;
use task_tracker::infrastructure::{
    AppConfig, AppDependencies, CompletionClient, HttpCompletionClient, JsonFileTaskStore,
};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,task_tracker=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Task Tracker Service...");

    // Load configuration
    let config = match AppConfig::from_env() {
        Ok(config) => {
            tracing::info!(
                "Configuration loaded: host={}, port={}, tasks_file={}",
                config.app_host,
                config.app_port,
                config.tasks_file
            );
            config
        }
        Err(e) => {
            tracing::warn!("Failed to load configuration from environment: {e}");
            tracing::info!("Using default configuration");
            AppConfig::default()
        }
    };

    let bind_address = format!("{}:{}", config.app_host, config.app_port);

    // Initialize the storage backend
    let task_store = Arc::new(JsonFileTaskStore::new(&config.tasks_file));

    // Initialize the completion client when credentials are configured
    let completion_client: Option<Arc<dyn CompletionClient>> =
        match (&config.completion_base_url, &config.completion_api_token) {
            (Some(base_url), Some(token)) => {
                match HttpCompletionClient::new(
                    base_url.clone(),
                    token.clone(),
                    Duration::from_secs(config.completion_timeout_secs),
                ) {
                    Ok(client) => {
                        tracing::info!(
                            "Completion endpoint enabled: model={}",
                            config.completion_model
                        );
                        Some(Arc::new(client))
                    }
                    Err(e) => {
                        tracing::warn!("Failed to build completion client: {e}");
                        tracing::info!("Running with the completion call disabled");
                        None
                    }
                }
            }
            _ => {
                tracing::info!("Completion credentials not configured; remote call disabled");
                None
            }
        };

    // Create dependencies container
    let deps = AppDependencies::new(task_store, completion_client, config.completion_model);

    // Create router with middleware
    let app = create_router(deps).layer(TraceLayer::new_for_http());

    // Start server
    let listener = match TcpListener::bind(&bind_address).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!("Failed to bind {bind_address}: {e}");
            std::process::exit(1);
        }
    };
    tracing::info!("Task Tracker Service started on http://{bind_address}");
    tracing::info!("Available endpoints:");
    tracing::info!("  GET    /tasks           - List tasks");
    tracing::info!("  POST   /tasks           - Create task");
    tracing::info!("  PUT    /tasks/:task_id  - Update task title");
    tracing::info!("  DELETE /tasks/:task_id  - Delete task");
    tracing::info!("  GET    /health          - Health check");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        tracing::error!("Server error: {e}");
        std::process::exit(1);
    }

    tracing::info!("Task Tracker Service stopped");
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        tracing::error!("Failed to install CTRL+C signal handler");
        return;
    }
    tracing::info!("Shutdown signal received");
}
