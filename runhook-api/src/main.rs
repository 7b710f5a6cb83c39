use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod api;
pub mod config;
pub mod service;

#[cfg(test)]
mod testing;

use crate::config::ApiConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "runhook_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Runhook API...");

    let config = ApiConfig::from_env();
    config.validate().context("Invalid configuration")?;

    tracing::info!(
        "Job target: {}/{} in {} via {}",
        config.target.project,
        config.target.job,
        config.target.region,
        config.run_endpoint
    );
    tracing::info!("Metadata token URL: {}", config.metadata_url);

    let addr = config.bind_addr.clone();

    // Build router with all API endpoints
    let app = api::create_router(config);

    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    axum::serve(listener, app)
        .await
        .context("Failed to start server")?;

    Ok(())
}
