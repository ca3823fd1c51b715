//! Catalog Backend - racing and sports lookup services
//!
//! Serves the racing and sports RPC methods through the HTTP/JSON gateway.

use std::sync::Arc;

use anyhow::Context;
use catalog_backend::app::{AppState, build_app};
use catalog_backend::cli::CliOptions;
use catalog_backend::config::Config;
use catalog_backend::db::Database;
use catalog_backend::logging;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = CliOptions::from_args();
    let config = Arc::new(Config::from_env()?.apply_cli(cli));

    logging::init(config.log_format);

    tracing::info!("Starting Catalog Backend");
    tracing::info!(
        database_url = %config.database_url,
        query_timeout = ?config.query_timeout,
        "Configuration loaded"
    );

    let db = Database::connect(&config.database_url, config.database_max_connections).await?;
    db.migrate().await?;
    tracing::info!("Database connected");

    if config.seed_demo_data {
        db.races().init().await.context("Failed to seed demo races")?;
    }

    let state = AppState::new(config.clone(), db);
    let app = build_app(state);

    let listener = tokio::net::TcpListener::bind(&config.api_endpoint)
        .await
        .with_context(|| format!("Failed to bind {}", config.api_endpoint))?;
    tracing::info!("Listening on {}", config.api_endpoint);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
