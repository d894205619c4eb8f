//! HTTP error response conversion
//!
//! The single boundary where application errors become client responses.
//! Handlers return `Result<impl IntoResponse, HttpError>`; anything that
//! escapes is logged with full detail and mapped through the error kind's
//! designated status code. Clients only ever see `{"error": <message>}`,
//! and for server faults the message is the uniform opaque one.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use storefront_core::{AppError, LogLevel};
use storefront_storage::StorageError;

/// Client-visible error body. Deliberately a single field: internal error
/// type and detail never leave the process.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Wrapper type for AppError to implement IntoResponse
/// (orphan rules: IntoResponse is external, AppError lives in storefront-core)
#[derive(Debug)]
pub struct HttpError(pub AppError);

impl From<AppError> for HttpError {
    fn from(err: AppError) -> Self {
        HttpError(err)
    }
}

impl From<sqlx::Error> for HttpError {
    fn from(err: sqlx::Error) -> Self {
        HttpError(AppError::Database(err))
    }
}

impl From<StorageError> for HttpError {
    fn from(err: StorageError) -> Self {
        let app = match err {
            StorageError::NotFound(msg) => AppError::NotFound(msg),
            StorageError::WriteFailed(msg) => AppError::StorageWrite(msg),
            StorageError::InvalidKey(msg) => AppError::InvalidInput(msg),
            StorageError::IoError(err) => AppError::Internal(format!("IO error: {}", err)),
            StorageError::ConfigError(msg) => AppError::Internal(msg),
        };
        HttpError(app)
    }
}

fn log_error(error: &AppError) {
    let error_code = error.error_code();
    match error.log_level() {
        LogLevel::Debug => {
            tracing::debug!(error = %error, error_code = error_code, "Request failed");
        }
        LogLevel::Warn => {
            tracing::warn!(error = %error, error_code = error_code, "Request failed");
        }
        LogLevel::Error => {
            tracing::error!(error = %error, error_code = error_code, "Request failed");
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let app_error = &self.0;

        log_error(app_error);

        let status = StatusCode::from_u16(app_error.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = Json(ErrorBody {
            error: app_error.client_message(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::error::GENERIC_SERVER_ERROR;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn unhandled_errors_become_opaque_500s() {
        let response =
            HttpError::from(AppError::Internal("connection reset".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let json = body_json(response).await;
        assert_eq!(json, serde_json::json!({ "error": GENERIC_SERVER_ERROR }));
    }

    #[tokio::test]
    async fn storage_write_failures_are_server_faults() {
        let err: HttpError = StorageError::WriteFailed("disk full".to_string()).into();
        assert!(matches!(err.0, AppError::StorageWrite(_)));

        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let json = body_json(response).await;
        assert_eq!(json["error"], GENERIC_SERVER_ERROR);
    }

    #[tokio::test]
    async fn invalid_storage_keys_are_client_faults() {
        let err: HttpError = StorageError::InvalidKey("bad key".to_string()).into();
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let json = body_json(response).await;
        assert_eq!(json["error"], "bad key");
    }

    #[tokio::test]
    async fn not_found_keeps_its_detail() {
        let response =
            HttpError::from(AppError::NotFound("no stored upload".to_string())).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let json = body_json(response).await;
        assert_eq!(json["error"], "no stored upload");
    }
}
