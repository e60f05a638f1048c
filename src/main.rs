use std::sync::Arc;

use anyhow::Context;
use movie_recommender::{
    config::Config,
    routes::{create_router, AppState},
    services::{sources::CsvFileSource, Catalog, LoadOptions},
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging, RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("movie_recommender=info,tower_http=info")),
        )
        .init();

    let config = Config::from_env()?;

    // Load the catalog and build its similarity graph before accepting traffic
    let source = Arc::new(CsvFileSource::new(&config.catalog_path));
    let catalog = Catalog::load(source.as_ref(), LoadOptions::from(&config))
        .await
        .with_context(|| format!("Failed to load movie catalog from {}", config.catalog_path))?;

    // Create the router with all routes
    let address = config.bind_address();
    let state = AppState::new(catalog, source, config);
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind {}", address))?;
    tracing::info!(address = %address, "Server listening");

    // Serve until Ctrl+C, letting in-flight requests finish
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
    tracing::info!("Shutdown signal received");
}
