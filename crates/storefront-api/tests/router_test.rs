//! Router composition integration tests: dispatch, landing page, and the
//! central error boundary.

mod helpers;

use axum::http::StatusCode;
use axum::routing::get;
use helpers::{setup_test_app, setup_test_app_with_route};
use storefront_api::error::HttpError;
use storefront_core::AppError;

#[tokio::test]
async fn landing_page_renders() {
    let app = setup_test_app().await;

    let response = app.client().get("/").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Storefront"));
}

#[tokio::test]
async fn every_group_is_reachable_by_prefix() {
    let app = setup_test_app().await;

    // 501 (not 404) proves dispatch reached the mounted group.
    let checks = [
        app.client().post("/auth/login").await,
        app.client().get("/item").await,
        app.client().get("/cart").await,
        app.client().post("/payment/checkout").await,
        app.client().get("/orders").await,
    ];
    for response in checks {
        assert_eq!(response.status_code(), StatusCode::NOT_IMPLEMENTED);
        let body: serde_json::Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("not implemented"));
    }
}

#[tokio::test]
async fn unknown_paths_are_404() {
    let app = setup_test_app().await;

    let response = app.client().get("/no/such/route").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unhandled_handler_errors_become_the_uniform_500() {
    let app = setup_test_app_with_route(
        "/boom",
        get(|| async { HttpError::from(AppError::Internal("wires crossed".to_string())) }),
    )
    .await;

    let response = app.client().get("/boom").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

    // The exact client-visible shape: no internal detail leaks.
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Something went wrong!" }));
}

#[tokio::test]
async fn database_errors_are_equally_opaque() {
    let app = setup_test_app_with_route(
        "/boom-db",
        get(|| async { HttpError::from(AppError::Database(sqlx::Error::PoolClosed)) }),
    )
    .await;

    let response = app.client().get("/boom-db").await;
    assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
    let body: serde_json::Value = response.json();
    assert_eq!(body, serde_json::json!({ "error": "Something went wrong!" }));
}

#[tokio::test]
async fn logout_clears_the_session_cookie() {
    let app = setup_test_app().await;

    let response = app.client().post("/auth/logout").await;
    assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

    let set_cookie = response
        .maybe_header("set-cookie")
        .expect("logout must set a removal cookie");
    let set_cookie = set_cookie.to_str().unwrap();
    assert!(set_cookie.starts_with("session="));
}
