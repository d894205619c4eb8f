use crate::{LocalStorage, Storage, StorageResult};
use std::sync::Arc;
use storefront_core::AppConfig;

/// Create the storage backend from configuration.
///
/// The backend is rooted at the public directory so stored files are
/// immediately fetchable through the static file layer. Construction is
/// centralized here so the composition root injects `Arc<dyn Storage>` and
/// never touches a concrete backend type.
pub async fn create_storage(config: &AppConfig) -> StorageResult<Arc<dyn Storage>> {
    let storage = LocalStorage::new(
        config.public_dir.clone(),
        config.public_base_url.clone(),
    )
    .await?;
    Ok(Arc::new(storage))
}
