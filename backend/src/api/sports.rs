//! Sports routes

use axum::body::Bytes;
use axum::extract::rejection::PathRejection;
use axum::extract::{Path, State};
use axum::routing::{get, post};
use axum::{Json, Router};

use super::error::{ApiError, decode_body};
use crate::app::AppState;
use crate::rpc::{CallContext, Event, GetEventRequest, ListEventsRequest, ListEventsResponse};

async fn list_events(
    State(state): State<AppState>,
    ctx: CallContext,
    body: Bytes,
) -> Result<Json<ListEventsResponse>, ApiError> {
    let req: ListEventsRequest = decode_body(&body)?;
    Ok(Json(state.sports.list_events(&ctx, req).await?))
}

async fn get_event(
    State(state): State<AppState>,
    ctx: CallContext,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Event>, ApiError> {
    let Path(id) = id?;
    Ok(Json(state.sports.get_event(&ctx, GetEventRequest { id }).await?))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/v1/list-events", post(list_events))
        .route("/v1/events/{id}", get(get_event))
}
