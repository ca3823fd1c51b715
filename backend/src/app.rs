//! Application state and HTTP router construction.
//!
//! Used by `main` and by the gateway tests to build the Axum app.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::api;
use crate::config::Config;
use crate::db::Database;
use crate::rpc::{Racing, Sports};
use crate::services::{RacingService, SportsService};

/// Shared state for HTTP handlers.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub racing: Arc<dyn Racing>,
    pub sports: Arc<dyn Sports>,
}

impl AppState {
    /// State backed by the races repository of `db` and the demo event store.
    pub fn new(config: Arc<Config>, db: Database) -> Self {
        let racing: Arc<dyn Racing> = Arc::new(RacingService::new(db.races()));
        Self {
            config,
            db,
            racing,
            sports: Arc::new(SportsService::default()),
        }
    }
}

/// Build the full Axum router: health probes plus the /v1 gateway routes.
/// Returns Router<()> (state fully applied) for use with axum::serve.
pub fn build_app(state: AppState) -> Router<()> {
    Router::new()
        .merge(api::health::router())
        .merge(api::racing::router())
        .merge(api::sports::router())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
