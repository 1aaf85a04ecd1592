//! keyward license server.
//!
//! Usage:
//!   JWT_SECRET=... keyward-server --bind 0.0.0.0:8080 --db ./storage/storage.db

use anyhow::{Context, Result};
use clap::Parser;
use keyward_server::{build_router, AppState, ServerConfig};
use keyward_storage::SqliteStore;
use keyward_types::SystemClock;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let config = ServerConfig::parse();
    let default_level = if config.verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();

    info!(
        bind = %config.bind,
        db = %config.db.display(),
        token_ttl_minutes = config.token_ttl_minutes,
        "keyward server starting"
    );

    let store = SqliteStore::open(&config.db)
        .with_context(|| format!("failed to open database at {}", config.db.display()))?;
    let state = AppState::new(
        store,
        config.token_config(),
        config.hash_params(),
        Arc::new(SystemClock),
    );

    let listener = tokio::net::TcpListener::bind(config.bind)
        .await
        .with_context(|| format!("failed to bind {}", config.bind))?;
    info!("HTTP API listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("keyward server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
