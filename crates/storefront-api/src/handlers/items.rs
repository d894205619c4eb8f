//! Item route group (`/item`).
//!
//! Carries the upload ingestion pipeline for item images: extract the
//! multipart file, validate it, assign a collision-resistant storage name,
//! and hand the bytes to the storage backend. The stored file is publicly
//! fetchable at the returned URL immediately, via the static file layer.
//!
//! The catalog CRUD endpoints are owned by the catalog service and are only
//! mounted here.

use crate::error::HttpError;
use crate::handlers::upload;
use crate::state::AppState;
use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    routing::{delete, get, post},
    Json, Router,
};
use serde::Serialize;
use std::sync::Arc;
use storefront_core::AppError;
use storefront_storage::{keys, naming};

pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", get(list_items).post(create_item))
        .route("/{id}", get(get_item).put(update_item).delete(delete_item))
        .route("/images", post(upload_image))
        .route("/images/{name}", delete(delete_image))
}

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Generated storage name, `{token}-{original}`.
    pub file_name: String,
    /// Sanitized original filename, as recoverable from `file_name`.
    pub original_name: String,
    pub size_bytes: usize,
    pub url: String,
}

/// Upload an item image.
///
/// Two concurrent uploads with the same original filename never collide:
/// every call gets a fresh random token. The caller must persist the
/// returned `file_name` (e.g. on the item), otherwise the stored file
/// becomes unreferenced.
async fn upload_image(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), HttpError> {
    let (data, original_filename, content_type) = upload::extract_multipart_file(multipart).await?;

    upload::validate_file_size(data.len(), state.config.max_upload_size_bytes)?;
    upload::validate_file_extension(&original_filename, &state.config.allowed_extensions)?;
    upload::validate_content_type(&content_type, &state.config.allowed_content_types)?;

    let file_name = naming::unique_name(&original_filename);
    let storage_key = keys::image_key(&file_name);
    let size_bytes = data.len();

    let url = state.storage.store(&storage_key, &content_type, data).await?;

    tracing::info!(
        file_name = %file_name,
        size_bytes,
        content_type = %content_type,
        "Item image stored"
    );

    let original_name = naming::original_name(&file_name)
        .unwrap_or(&file_name)
        .to_string();

    Ok((
        StatusCode::CREATED,
        Json(UploadResponse {
            file_name,
            original_name,
            size_bytes,
            url,
        }),
    ))
}

/// Delete a stored item image by its generated name.
async fn delete_image(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<StatusCode, HttpError> {
    let storage_key = keys::image_key(&name);

    if !state.storage.exists(&storage_key).await? {
        return Err(AppError::NotFound(format!("no stored upload named {}", name)).into());
    }
    state.storage.delete(&storage_key).await?;

    tracing::info!(file_name = %name, "Item image deleted");
    Ok(StatusCode::NO_CONTENT)
}

async fn list_items() -> HttpError {
    AppError::NotImplemented("item catalog").into()
}

async fn get_item() -> HttpError {
    AppError::NotImplemented("item lookup").into()
}

async fn create_item() -> HttpError {
    AppError::NotImplemented("item creation").into()
}

async fn update_item() -> HttpError {
    AppError::NotImplemented("item update").into()
}

async fn delete_item() -> HttpError {
    AppError::NotImplemented("item deletion").into()
}
