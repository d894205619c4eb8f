use storefront_core::AppConfig;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    // Load configuration
    let config = AppConfig::from_env()?;

    // Initialize the application (telemetry, database, storage, routes).
    // Connecting to the database happens here, before the listener exists:
    // a failed connection aborts startup with a non-zero exit.
    let (state, router) = storefront_api::setup::initialize_app(config).await?;

    // Start the server
    storefront_api::setup::server::start_server(&state.config, router).await?;

    Ok(())
}
