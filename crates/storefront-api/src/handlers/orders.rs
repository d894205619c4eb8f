//! Orders route group (`/orders`).
//!
//! Order business rules are owned by the orders service; this module only
//! mounts its endpoint surface.

use crate::error::HttpError;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use storefront_core::AppError;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_orders).post(place_order))
        .route("/{id}", get(get_order))
}

async fn list_orders() -> HttpError {
    AppError::NotImplemented("order history").into()
}

async fn get_order() -> HttpError {
    AppError::NotImplemented("order lookup").into()
}

async fn place_order() -> HttpError {
    AppError::NotImplemented("order placement").into()
}
