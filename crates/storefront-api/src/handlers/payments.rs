//! Payment route group (`/payment`).
//!
//! Provider integration is owned by the payment service; this module only
//! mounts its endpoint surface.

use crate::error::HttpError;
use crate::state::AppState;
use axum::{routing::post, Router};
use std::sync::Arc;
use storefront_core::AppError;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/checkout", post(checkout))
        .route("/webhook", post(provider_webhook))
}

async fn checkout() -> HttpError {
    AppError::NotImplemented("checkout").into()
}

async fn provider_webhook() -> HttpError {
    AppError::NotImplemented("payment provider webhook").into()
}
