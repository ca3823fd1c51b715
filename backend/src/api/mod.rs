//! HTTP/JSON gateway in front of the RPC services.
//!
//! Every RPC method is reachable through one fixed route; request bodies are the
//! JSON form of the RPC request and failures are rendered as a JSON [Status]
//! with a matching HTTP status code.
//!
//! [Status]: crate::rpc::Status

pub mod error;
pub mod health;
pub mod racing;
pub mod sports;

pub use error::{ApiError, GRPC_TIMEOUT_HEADER, http_status};
