//! Health check endpoints

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;
use tracing::warn;

use crate::app::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

#[derive(Serialize)]
pub struct ReadyResponse {
    pub ready: bool,
    pub database: bool,
    /// Stored races, when the races relation could be read
    pub races: Option<i64>,
}

/// Health check - always returns OK if the server is running
async fn healthz() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Readiness check - the races relation must be readable
async fn readyz(State(state): State<AppState>) -> Json<ReadyResponse> {
    let races = match state.db.races().count().await {
        Ok(count) => Some(count),
        Err(e) => {
            warn!(error = %e, "Readiness check failed");
            None
        }
    };
    let ready = races.is_some();

    Json(ReadyResponse {
        ready,
        database: ready,
        races,
    })
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
}
