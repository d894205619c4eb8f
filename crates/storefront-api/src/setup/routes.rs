//! Route configuration and setup.
//!
//! Cross-cutting concerns are composed once, here, in a fixed order:
//! request logging, CORS, request timeout, body limits. Static assets from
//! the public directory are consulted before dispatch and short-circuit the
//! route groups on a hit; everything else is dispatched by path prefix to
//! one of the five independently-owned route groups.

use crate::handlers;
use crate::state::AppState;
use axum::{
    extract::DefaultBodyLimit,
    http::{header, HeaderValue, Method},
    response::Html,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::services::ServeDir;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Setup all application routes
pub fn build_router(state: Arc<AppState>) -> Result<Router, anyhow::Error> {
    let cors = cors_layer(&state.config)?;
    let timeout = TimeoutLayer::new(Duration::from_secs(state.config.request_timeout_secs));
    let body_limit = RequestBodyLimitLayer::new(state.config.max_upload_size_bytes);
    let public_dir = state.config.public_dir.clone();

    // Static files win over route groups: the directory is consulted first
    // and only misses fall through to dispatch, for every request method.
    let with_static = ServeDir::new(public_dir)
        .call_fallback_on_method_not_allowed(true)
        .fallback(api_routes(state));

    Ok(Router::new()
        .fallback_service(with_static)
        .layer(body_limit)
        .layer(DefaultBodyLimit::disable())
        .layer(timeout)
        .layer(cors)
        .layer(TraceLayer::new_for_http()))
}

/// The dispatch table: five mount points, the landing page, health probes.
/// No per-route logic lives here; each group owns its own router.
fn api_routes(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(landing))
        .route("/health", get(handlers::health::liveness))
        .route("/health/ready", get(handlers::health::readiness))
        .nest("/auth", handlers::auth::router())
        .nest("/item", handlers::items::router())
        .nest("/cart", handlers::cart::router())
        .nest("/payment", handlers::payments::router())
        .nest("/orders", handlers::orders::router())
        .with_state(state)
}

/// CORS: a single configured origin with credentials. A wildcard cannot be
/// combined with credentials, so the allowed headers are named explicitly.
fn cors_layer(config: &storefront_core::AppConfig) -> Result<CorsLayer, anyhow::Error> {
    let origin: HeaderValue = config.frontend_url.parse().map_err(|_| {
        anyhow::anyhow!(
            "FRONTEND_URL is not a valid origin: {}",
            config.frontend_url
        )
    })?;

    Ok(CorsLayer::new()
        .allow_origin(origin)
        .allow_credentials(true)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::PATCH,
        ])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]))
}

async fn landing() -> Html<&'static str> {
    Html(include_str!("../../templates/home.html"))
}
