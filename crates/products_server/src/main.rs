//! Product catalogue REST server.
//!
//! Usage:
//!   DATABASE_URL="postgresql:///products" cargo run -p products_server
//!   cargo run -p products_server -- --storage memory

use anyhow::Context;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::info;

use products_server::{bootstrap, config::ServerConfig, router::build_router, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = ServerConfig::parse();
    telemetry::init_tracing();

    info!(storage = ?config.storage, "Starting products_server");
    let service = bootstrap::build_service(&config).await?;
    let app = build_router(service);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("products_server listening on {}", config.bind_addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
