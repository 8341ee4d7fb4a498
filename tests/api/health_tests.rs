//! Integration tests for GET /health.

use crate::common::*;
use rstest::rstest;

#[rstest]
#[tokio::test]
async fn health_reports_healthy() {
    let app = spawn_app().await;

    let result = app.client.health().await;

    assert_success(&result);
    let response = result.unwrap();
    assert_eq!(response.status, "healthy");
    assert_eq!(response.version, env!("CARGO_PKG_VERSION"));
}
