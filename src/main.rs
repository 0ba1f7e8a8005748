mod domain;
mod clients;

mod api;
mod app_system;

#[cfg(test)]
mod mock_framework;

mod actor_framework;
mod cart_actor;
mod order_actor;
mod product_actor;
mod user_actor;

use anyhow::Context;
use clap::Parser;
use tracing::{error, info};

use crate::app_system::{setup_tracing, Config, StoreSystem};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.validate()?;

    // Setup tracing once for the entire application
    setup_tracing(&config.log_filter);

    info!(bind = %config.bind, "Starting storefront");

    // Create the entire store system (starts all actors)
    let system = StoreSystem::new(config.channel_capacity);

    if config.seed_demo_data {
        system.seed_demo_data().await.context("seeding demo data")?;
    }

    let app = api::router(api::AppState::new(&system));
    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("binding {}", config.bind))?;
    info!(addr = %config.bind, "Listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("serving HTTP")?;

    // The router and its clients are gone, so the actors can drain and stop.
    if let Err(e) = system.shutdown().await {
        error!("Shutdown failed: {}", e);
        anyhow::bail!(e);
    }

    info!("Application completed successfully");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(error = %e, "Failed to listen for Ctrl-C, serving until killed");
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, shutting down");
}
