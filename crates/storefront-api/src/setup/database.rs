//! Database setup and initialization

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use std::time::Duration;
use storefront_core::{AppConfig, AppError};

/// Connect to the database, retrying with exponential backoff.
///
/// Transient partitions during container startup are common, so a bounded
/// number of attempts are made before the failure is declared
/// `DatabaseUnavailable` and startup aborts.
pub async fn connect_database(config: &AppConfig) -> Result<PgPool, AppError> {
    let attempts = config.db_connect_attempts.max(1);
    let mut backoff = Duration::from_millis(config.db_connect_backoff_ms);
    let mut attempt = 0u32;

    loop {
        attempt += 1;
        tracing::info!(attempt, attempts, "Connecting to database...");

        match PgPoolOptions::new()
            .max_connections(config.db_max_connections)
            .acquire_timeout(Duration::from_secs(config.db_timeout_seconds))
            .idle_timeout(Duration::from_secs(600))
            .max_lifetime(Duration::from_secs(1800))
            .connect(&config.database_url)
            .await
        {
            Ok(pool) => {
                tracing::info!(
                    max_connections = config.db_max_connections,
                    "Database connected successfully"
                );
                return Ok(pool);
            }
            Err(err) => {
                if attempt >= attempts {
                    tracing::error!(
                        error = %err,
                        attempts,
                        "Database unreachable, giving up"
                    );
                    return Err(AppError::DatabaseUnavailable(err));
                }
                tracing::warn!(
                    error = %err,
                    attempt,
                    backoff_ms = backoff.as_millis() as u64,
                    "Database connection attempt failed, retrying"
                );
                tokio::time::sleep(backoff).await;
                backoff *= 2;
            }
        }
    }
}
