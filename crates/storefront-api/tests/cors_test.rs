//! CORS policy integration tests.

mod helpers;

use axum::http::StatusCode;
use helpers::setup_test_app;

const ALLOWED_ORIGIN: &str = "http://localhost:5173";

#[tokio::test]
async fn allowed_origin_is_echoed_with_credentials() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/health")
        .add_header("Origin", ALLOWED_ORIGIN)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let allow_origin = response
        .maybe_header("access-control-allow-origin")
        .expect("allowed origin must be echoed");
    assert_eq!(allow_origin.to_str().unwrap(), ALLOWED_ORIGIN);

    let allow_credentials = response
        .maybe_header("access-control-allow-credentials")
        .expect("credentials must be enabled for the allowed origin");
    assert_eq!(allow_credentials.to_str().unwrap(), "true");
}

#[tokio::test]
async fn foreign_origin_is_not_echoed() {
    let app = setup_test_app().await;

    let response = app
        .client()
        .get("/health")
        .add_header("Origin", "http://evil.example")
        .await;

    assert!(response
        .maybe_header("access-control-allow-origin")
        .is_none());
}
