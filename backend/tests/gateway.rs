//! HTTP/JSON gateway tests, driven through the router with `oneshot`.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use pretty_assertions::assert_eq;
use serde_json::{Value, json};
use tower::ServiceExt;

use catalog_backend::app::{AppState, build_app};
use catalog_backend::config::Config;
use catalog_backend::db::Database;
use catalog_backend::rpc::{
    CallContext, GetRaceRequest, ListRacesRequest, ListRacesResponse, Race, Racing, RpcError,
};

async fn state() -> AppState {
    let db = Database::connect("sqlite::memory:", 1).await.unwrap();
    db.migrate().await.unwrap();
    db.races().init().await.unwrap();
    AppState::new(Arc::new(Config::default()), db)
}

async fn app() -> Router {
    build_app(state().await)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

fn post(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::post(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(body.into())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::get(uri).body(Body::empty()).unwrap()
}

#[tokio::test]
async fn test_health_endpoints() {
    let app = app().await;

    let (status, body) = send(app.clone(), get("/healthz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");

    let (status, body) = send(app, get("/readyz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], true);
    assert_eq!(body["races"], 100);
}

#[tokio::test]
async fn test_not_ready_without_schema() {
    let db = Database::connect("sqlite::memory:", 1).await.unwrap();
    let app = build_app(AppState::new(Arc::new(Config::default()), db));

    let (status, body) = send(app, get("/readyz")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ready"], false);
    assert_eq!(body["races"], Value::Null);
}

#[tokio::test]
async fn test_list_races_empty_body() {
    let (status, body) = send(app().await, post("/v1/list-races", "")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["races"].as_array().unwrap().len(), 100);
}

#[tokio::test]
async fn test_list_races_with_filter_and_order() {
    let request = json!({
        "filter": { "meetingIds": [4], "visibleOnly": true },
        "orderBy": "id DESC"
    });
    let (status, body) = send(app().await, post("/v1/list-races", request.to_string())).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<i64> = body["races"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![94, 74, 54, 34, 14]);
}

#[tokio::test]
async fn test_race_json_shape() {
    let (status, body) = send(app().await, get("/v1/races/14")).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 14);
    assert_eq!(body["meetingId"], 4);
    assert_eq!(body["visible"], true);
    assert!(body["advertisedStartTime"].as_str().unwrap().ends_with('Z'));
    let race_status = body["status"].as_str().unwrap();
    assert!(race_status == "OPEN" || race_status == "CLOSED");
}

#[tokio::test]
async fn test_invalid_order_by() {
    let request = json!({ "orderBy": "meeting_iid" });
    let (status, body) = send(app().await, post("/v1/list-races", request.to_string())).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3);
    assert_eq!(body["message"], "Field \"orderBy\" is invalid.");
    assert_eq!(
        body["details"][0]["@type"],
        "type.googleapis.com/google.rpc.BadRequest"
    );
    assert_eq!(body["details"][0]["fieldViolations"][0]["field"], "orderBy");
    assert!(
        body["details"][0]["fieldViolations"][0]["description"]
            .as_str()
            .unwrap()
            .starts_with("orderBy field is invalid")
    );
}

#[tokio::test]
async fn test_malformed_body() {
    let (status, body) = send(app().await, post("/v1/list-races", "{\"filter\":")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3);
    assert_eq!(body["message"], "The request is invalid.");
    assert_eq!(body["details"][0]["fieldViolations"][0]["field"], "");
}

#[tokio::test]
async fn test_race_not_found() {
    let (status, body) = send(app().await, get("/v1/races/1000")).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["code"], 5);
    assert_eq!(body["message"], "Race with ID 1000 does not exist.");
}

#[tokio::test]
async fn test_race_id_must_be_numeric() {
    let (status, body) = send(app().await, get("/v1/races/abc")).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], 3);
}

#[tokio::test]
async fn test_events() {
    let app = app().await;

    let (status, body) = send(app.clone(), post("/v1/list-events", "{}")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["events"].as_array().unwrap().len(), 3);

    let (status, body) = send(app.clone(), get("/v1/events/2")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 2);

    let (status, body) = send(app, get("/v1/events/9")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "Event with ID 9 does not exist.");
}

#[tokio::test]
async fn test_grpc_timeout_header() {
    let app = app().await;

    let request = Request::post("/v1/list-races")
        .header("grpc-timeout", "5S")
        .body(Body::empty())
        .unwrap();
    let (status, _) = send(app.clone(), request).await;
    assert_eq!(status, StatusCode::OK);

    let request = Request::post("/v1/list-races")
        .header("grpc-timeout", "soon")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "The request is invalid.");
}

struct StallingRacing;

#[async_trait]
impl Racing for StallingRacing {
    async fn list_races(
        &self,
        ctx: &CallContext,
        _req: ListRacesRequest,
    ) -> Result<ListRacesResponse, RpcError> {
        ctx.run(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Ok(ListRacesResponse::default())
        })
        .await
        .map_err(RpcError::from)
    }

    async fn get_race(&self, ctx: &CallContext, _req: GetRaceRequest) -> Result<Race, RpcError> {
        ctx.run(async {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(catalog_backend::error::CatalogError::not_found("unreachable"))
        })
        .await
        .map_err(RpcError::from)
    }
}

#[tokio::test]
async fn test_deadline_maps_to_gateway_timeout() {
    let mut state = state().await;
    state.racing = Arc::new(StallingRacing);
    let app = build_app(state);

    let request = Request::post("/v1/list-races")
        .header("grpc-timeout", "20m")
        .body(Body::empty())
        .unwrap();
    let (status, body) = send(app, request).await;

    assert_eq!(status, StatusCode::GATEWAY_TIMEOUT);
    assert_eq!(body["code"], 4);
}
