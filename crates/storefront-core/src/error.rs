//! Error types module
//!
//! All failures that can reach the HTTP boundary are unified under the
//! `AppError` enum. Every variant carries a designated status code, error
//! code, and log level; the mapping is total so nothing falls through to an
//! unclassified catch-all. Server-side failures (5xx) are reported to
//! clients with a uniform opaque message while the full detail goes to the
//! operator log.

use sqlx::Error as SqlxError;

/// Log level for error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Debug level - for expected errors like validation failures
    Debug,
    /// Warning level - for recoverable issues
    Warn,
    /// Error level - for unexpected failures
    Error,
}

/// Client-facing message for all server-side failures.
pub const GENERIC_SERVER_ERROR: &str = "Something went wrong!";

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The backing store could not be reached at startup. Fatal: the
    /// listener must not bind when this is returned.
    #[error("database unavailable: {0}")]
    DatabaseUnavailable(#[source] SqlxError),

    #[error("database error: {0}")]
    Database(#[source] SqlxError),

    #[error("storage write failed: {0}")]
    StorageWrite(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("file too large: {0}")]
    PayloadTooLarge(String),

    #[error("unauthorized: {0}")]
    Unauthorized(String),

    /// Endpoint is mounted but its handler lives outside this service.
    #[error("{0} is not implemented")]
    NotImplemented(&'static str),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<SqlxError> for AppError {
    fn from(err: SqlxError) -> Self {
        AppError::Database(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Internal(format!("IO error: {}", err))
    }
}

/// Static metadata per variant: (http_status, error_code, log_level).
/// Kept as a single table so the kind-to-status mapping stays explicit and
/// total; `client_message` stays per-variant for dynamic content.
fn static_metadata(err: &AppError) -> (u16, &'static str, LogLevel) {
    match err {
        AppError::DatabaseUnavailable(_) => (503, "DATABASE_UNAVAILABLE", LogLevel::Error),
        AppError::Database(_) => (500, "DATABASE_ERROR", LogLevel::Error),
        AppError::StorageWrite(_) => (500, "STORAGE_WRITE_FAILED", LogLevel::Error),
        AppError::InvalidInput(_) => (400, "INVALID_INPUT", LogLevel::Debug),
        AppError::NotFound(_) => (404, "NOT_FOUND", LogLevel::Debug),
        AppError::PayloadTooLarge(_) => (413, "PAYLOAD_TOO_LARGE", LogLevel::Debug),
        AppError::Unauthorized(_) => (401, "UNAUTHORIZED", LogLevel::Debug),
        AppError::NotImplemented(_) => (501, "NOT_IMPLEMENTED", LogLevel::Debug),
        AppError::Internal(_) => (500, "INTERNAL_ERROR", LogLevel::Error),
    }
}

impl AppError {
    pub fn status_code(&self) -> u16 {
        static_metadata(self).0
    }

    pub fn error_code(&self) -> &'static str {
        static_metadata(self).1
    }

    pub fn log_level(&self) -> LogLevel {
        static_metadata(self).2
    }

    /// Message exposed to clients. Server faults are deliberately opaque;
    /// client-caused failures carry enough detail to be fixed by the caller.
    pub fn client_message(&self) -> String {
        match self {
            AppError::DatabaseUnavailable(_)
            | AppError::Database(_)
            | AppError::StorageWrite(_)
            | AppError::Internal(_) => GENERIC_SERVER_ERROR.to_string(),
            AppError::InvalidInput(msg) | AppError::NotFound(msg) => msg.clone(),
            AppError::PayloadTooLarge(msg) | AppError::Unauthorized(msg) => msg.clone(),
            AppError::NotImplemented(_) => self.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn server_faults_map_to_5xx_with_opaque_message() {
        let errors = [
            AppError::Database(SqlxError::PoolClosed),
            AppError::StorageWrite("disk full".to_string()),
            AppError::Internal("boom".to_string()),
        ];
        for err in errors {
            assert_eq!(err.status_code(), 500);
            assert_eq!(err.client_message(), GENERIC_SERVER_ERROR);
        }
        let gate = AppError::DatabaseUnavailable(SqlxError::PoolClosed);
        assert_eq!(gate.status_code(), 503);
        assert_eq!(gate.client_message(), GENERIC_SERVER_ERROR);
    }

    #[test]
    fn client_faults_map_to_4xx_and_keep_detail() {
        let err = AppError::InvalidInput("missing file field".to_string());
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.client_message(), "missing file field");

        assert_eq!(
            AppError::NotFound("no such upload".to_string()).status_code(),
            404
        );
        assert_eq!(
            AppError::PayloadTooLarge("too big".to_string()).status_code(),
            413
        );
        assert_eq!(
            AppError::Unauthorized("no session".to_string()).status_code(),
            401
        );
    }

    #[test]
    fn stub_endpoints_map_to_501() {
        let err = AppError::NotImplemented("item catalog");
        assert_eq!(err.status_code(), 501);
        assert_eq!(err.client_message(), "item catalog is not implemented");
    }

    #[test]
    fn log_levels_match_fault_owner() {
        assert_eq!(
            AppError::Internal("x".to_string()).log_level(),
            LogLevel::Error
        );
        assert_eq!(
            AppError::InvalidInput("x".to_string()).log_level(),
            LogLevel::Debug
        );
    }
}
