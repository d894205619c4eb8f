//! Logging bootstrap.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing with an env-filterable fmt subscriber.
///
/// Safe to call more than once; later calls are no-ops (relevant for tests
/// that build the app repeatedly in one process).
pub fn init_telemetry() {
    let _ = tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                "storefront_api=debug,storefront_core=debug,storefront_storage=debug,tower_http=debug"
                    .into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();
}
