//! Integration tests for health and metrics endpoints.

mod common;

use axum::http::StatusCode;
use common::{create_test_app, get_request, send};

#[tokio::test]
async fn test_health_check_memory_backend() {
    let app = create_test_app();

    let (status, body) = send(&app, get_request("/health")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    assert_eq!(body["storage"]["backend"], "memory");
    assert_eq!(body["storage"]["connected"], true);
    assert!(body["storage"].get("latency_ms").is_none());
}

#[tokio::test]
async fn test_liveness_probe() {
    let app = create_test_app();

    let (status, body) = send(&app, get_request("/health/live")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "alive");
}

#[tokio::test]
async fn test_readiness_probe() {
    let app = create_test_app();

    let (status, body) = send(&app, get_request("/health/ready")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ready");
}

#[tokio::test]
async fn test_response_carries_generated_request_id() {
    use tower::ServiceExt;

    let app = create_test_app();
    let response = app.oneshot(get_request("/health/live")).await.unwrap();

    let request_id = response
        .headers()
        .get("x-request-id")
        .and_then(|v| v.to_str().ok())
        .unwrap();
    assert!(!request_id.is_empty());
}

#[tokio::test]
async fn test_metrics_endpoint_responds() {
    let app = create_test_app();

    // The recorder is installed by main; tests may or may not have one.
    let (status, _) = send(&app, get_request("/metrics")).await;
    assert!(status == StatusCode::OK || status == StatusCode::SERVICE_UNAVAILABLE);
}

#[tokio::test]
async fn test_unknown_route_returns_404() {
    let app = create_test_app();

    let (status, _) = send(&app, get_request("/nope")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
