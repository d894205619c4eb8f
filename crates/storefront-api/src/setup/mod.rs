//! Application setup and initialization
//!
//! Startup is one fallible sequence: validate config, init telemetry,
//! connect the database, build storage and state, compose routes. The
//! listener (see [server]) only binds after every step here has succeeded,
//! so the process never serves requests against an unreachable store.

pub mod database;
pub mod routes;
pub mod server;

use crate::state::AppState;
use anyhow::{Context, Result};
use std::sync::Arc;
use storefront_core::AppConfig;

/// Initialize the entire application
pub async fn initialize_app(config: AppConfig) -> Result<(Arc<AppState>, axum::Router)> {
    // Fail fast on misconfiguration
    config
        .validate()
        .context("Configuration validation failed")?;

    crate::telemetry::init_telemetry();
    tracing::info!("Configuration loaded and validated successfully");

    // The connection gate: no pool, no server.
    let pool = database::connect_database(&config)
        .await
        .context("Database connection failed, refusing to start")?;

    let storage = storefront_storage::create_storage(&config)
        .await
        .context("Storage setup failed")?;

    let state = Arc::new(AppState {
        config,
        db: pool,
        storage,
    });

    let router = routes::build_router(state.clone())?;

    Ok((state, router))
}
