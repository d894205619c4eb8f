//! Storage abstraction trait
//!
//! Defines the `Storage` trait all storage backends must implement. The
//! naming logic stays backend-agnostic: callers compute a key and hand the
//! bytes over, the backend answers with a publicly fetchable URL.

use async_trait::async_trait;
use thiserror::Error;

/// Storage operation errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("write failed: {0}")]
    WriteFailed(String),

    #[error("file not found: {0}")]
    NotFound(String),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("configuration error: {0}")]
    ConfigError(String),
}

/// Result type for storage operations
pub type StorageResult<T> = Result<T, StorageError>;

/// Storage abstraction trait
///
/// Backends persist bytes under a caller-supplied key and serve them at a
/// stable public URL. Keys follow the format described in the crate root
/// documentation and must not contain `..` or a leading `/`.
#[async_trait]
pub trait Storage: Send + Sync {
    /// Persist `data` under `storage_key` and return the public URL it is
    /// fetchable at. Overwrites are not expected in practice: callers derive
    /// keys from [crate::naming::unique_name], which never repeats.
    async fn store(
        &self,
        storage_key: &str,
        content_type: &str,
        data: Vec<u8>,
    ) -> StorageResult<String>;

    /// Check if a file exists
    async fn exists(&self, storage_key: &str) -> StorageResult<bool>;

    /// Delete a file by its storage key. Deleting an absent key is a no-op.
    async fn delete(&self, storage_key: &str) -> StorageResult<()>;

    /// Public URL for a storage key, without touching the backend.
    fn public_url(&self, storage_key: &str) -> String;
}
