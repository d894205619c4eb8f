//! Shared application state.

use sqlx::PgPool;
use std::sync::Arc;
use storefront_core::AppConfig;
use storefront_storage::Storage;

/// Application state injected into every route group at composition time.
///
/// The database pool is the single process-wide handle; concurrency safety
/// of concurrent queries is the pool's concern. Nothing in here is reachable
/// as an ambient global, so every dependency can be substituted in tests.
pub struct AppState {
    pub config: AppConfig,
    pub db: PgPool,
    pub storage: Arc<dyn Storage>,
}
