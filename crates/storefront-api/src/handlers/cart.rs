//! Cart route group (`/cart`).
//!
//! Cart business rules are owned by the cart service; this module only
//! mounts its endpoint surface.

use crate::error::HttpError;
use crate::state::AppState;
use axum::{
    routing::{delete, get, post},
    Router,
};
use std::sync::Arc;
use storefront_core::AppError;

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(get_cart))
        .route("/items", post(add_item))
        .route("/items/{id}", delete(remove_item))
}

async fn get_cart() -> HttpError {
    AppError::NotImplemented("cart contents").into()
}

async fn add_item() -> HttpError {
    AppError::NotImplemented("adding to cart").into()
}

async fn remove_item() -> HttpError {
    AppError::NotImplemented("removing from cart").into()
}
