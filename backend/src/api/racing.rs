//! Racing routes

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use super::error::{ApiError, decode_body};
use crate::app::AppState;
use crate::rpc::{CallContext, GetRaceRequest, ListRacesRequest, ListRacesResponse, Race};

/// List races: body is a JSON `ListRacesRequest`
async fn list_races(
    State(state): State<AppState>,
    ctx: CallContext,
    body: Bytes,
) -> Result<Json<ListRacesResponse>, ApiError> {
    let req: ListRacesRequest = decode_body(&body)?;
    Ok(Json(state.racing.list_races(&ctx, req).await?))
}

/// Get a race by ID
async fn get_race(
    State(state): State<AppState>,
    ctx: CallContext,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Race>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.racing.get_race(&ctx, GetRaceRequest { id }).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/list-races", post(list_races))
        .route("/v1/races/{id}", get(get_race))
}
