//! Gateway error rendering and per-call extractors.

use axum::Json;
use axum::body::Bytes;
use axum::extract::FromRequestParts;
use axum::extract::rejection::PathRejection;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use serde::de::DeserializeOwned;

use crate::app::AppState;
use crate::error::CatalogError;
use crate::rpc::{CallContext, Code, RpcError, Status, parse_grpc_timeout, translate};

/// Header carrying the caller's deadline, in gRPC timeout syntax.
pub const GRPC_TIMEOUT_HEADER: &str = "grpc-timeout";

/// A [Status] on its way back to an HTTP client.
#[derive(Debug)]
pub struct ApiError(pub Status);

impl ApiError {
    /// Reject a request that could not be decoded. Not attributed to a field.
    pub fn invalid_request(details: impl Into<String>) -> Self {
        ApiError(translate(CatalogError::invalid_argument("", details)).into_status())
    }
}

impl From<RpcError> for ApiError {
    fn from(err: RpcError) -> Self {
        ApiError(err.into_status())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::invalid_request(rejection.body_text())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (http_status(self.0.code()), Json(self.0)).into_response()
    }
}

/// HTTP status for a protocol status code.
pub fn http_status(code: Code) -> StatusCode {
    match code {
        Code::InvalidArgument => StatusCode::BAD_REQUEST,
        Code::NotFound => StatusCode::NOT_FOUND,
        Code::DeadlineExceeded => StatusCode::GATEWAY_TIMEOUT,
        Code::Internal => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

/// Decode a JSON request body. An empty body decodes to the default request.
pub fn decode_body<T: DeserializeOwned + Default>(body: &Bytes) -> Result<T, ApiError> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(T::default());
    }
    serde_json::from_slice(body).map_err(|e| ApiError::invalid_request(e.to_string()))
}

impl FromRequestParts<AppState> for CallContext {
    type Rejection = ApiError;

    /// Deadline from the `grpc-timeout` header, else the configured default.
    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Self::Rejection> {
        let Some(value) = parts.headers.get(GRPC_TIMEOUT_HEADER) else {
            return Ok(match state.config.query_timeout {
                Some(timeout) => CallContext::with_timeout(timeout),
                None => CallContext::background(),
            });
        };

        value
            .to_str()
            .ok()
            .and_then(parse_grpc_timeout)
            .map(CallContext::with_timeout)
            .ok_or_else(|| {
                ApiError::invalid_request(format!("invalid {GRPC_TIMEOUT_HEADER} header"))
            })
    }
}
