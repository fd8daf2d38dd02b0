// Main entry point - Dependency injection and server setup
mod application;
mod domain;
mod infrastructure;
mod presentation;

use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::EnvFilter;

use crate::application::controller::DashboardController;
use crate::application::engine::DashboardEngine;
use crate::infrastructure::config::load_app_config;
use crate::infrastructure::system_clock::SystemClock;
use crate::presentation::app_state::AppState;
use crate::presentation::router::build_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let app_config = load_app_config()?;

    // Create engine (application layer)
    let engine = DashboardEngine::new(
        app_config.engine_options(),
        app_config.translations(),
        Arc::new(SystemClock),
    )?;
    let controller = Arc::new(DashboardController::new(
        engine,
        app_config.tick_periods(),
        app_config.wifi_connect_delay(),
    ));
    controller.start().await;

    // Build router (presentation layer)
    let (shutdown_tx, shutdown_rx) = tokio::sync::watch::channel(false);
    let state = Arc::new(AppState::new(controller.clone(), shutdown_rx));
    let router = build_router(state);

    // Start server
    let addr: SocketAddr = app_config.server.bind.parse()?;
    tracing::info!("Starting nanofish-telemetry on {}", addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, router)
        .with_graceful_shutdown(async move {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown requested");
            let _ = shutdown_tx.send(true);
        })
        .await?;

    controller.shutdown().await;

    Ok(())
}
