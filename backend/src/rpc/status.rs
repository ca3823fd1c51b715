//! Wire-level error shape and the translation from domain errors.
//!
//! A [Status] mirrors `google.rpc.Status`: a numeric code, a user-facing summary
//! and zero or more typed detail blocks. Only one detail type is produced here,
//! a `BadRequest` holding a single field violation for invalid arguments.
//!
//! [translate] is the only place that looks inside a [CatalogError] to decide
//! what the caller sees.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use thiserror::Error;

use crate::error::CatalogError;

/// Protocol status codes, numbered as in gRPC.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Code {
    InvalidArgument,
    DeadlineExceeded,
    NotFound,
    Internal,
}

impl Code {
    pub fn as_i32(self) -> i32 {
        match self {
            Code::InvalidArgument => 3,
            Code::DeadlineExceeded => 4,
            Code::NotFound => 5,
            Code::Internal => 13,
        }
    }

    pub fn from_i32(value: i32) -> Option<Self> {
        match value {
            3 => Some(Code::InvalidArgument),
            4 => Some(Code::DeadlineExceeded),
            5 => Some(Code::NotFound),
            13 => Some(Code::Internal),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Code::InvalidArgument => "InvalidArgument",
            Code::DeadlineExceeded => "DeadlineExceeded",
            Code::NotFound => "NotFound",
            Code::Internal => "Internal",
        }
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for Code {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i32(self.as_i32())
    }
}

impl<'de> Deserialize<'de> for Code {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = i32::deserialize(deserializer)?;
        Code::from_i32(value)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown status code {value}")))
    }
}

/// A single request field paired with what is wrong with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldViolation {
    pub field: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BadRequest {
    pub field_violations: Vec<FieldViolation>,
}

/// Typed detail attached to a [Status].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "@type")]
pub enum StatusDetail {
    #[serde(rename = "type.googleapis.com/google.rpc.BadRequest")]
    BadRequest(BadRequest),
}

/// Protocol-level error returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Status {
    code: Code,
    message: String,
    #[serde(default)]
    details: Vec<StatusDetail>,
}

impl Status {
    pub fn new(code: Code, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: Vec::new(),
        }
    }

    pub fn with_detail(mut self, detail: StatusDetail) -> Self {
        self.details.push(detail);
        self
    }

    pub fn code(&self) -> Code {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn details(&self) -> &[StatusDetail] {
        &self.details
    }

    /// First field violation carried by a `BadRequest` detail, if any.
    pub fn field_violation(&self) -> Option<&FieldViolation> {
        self.details.iter().find_map(|detail| match detail {
            StatusDetail::BadRequest(br) => br.field_violations.first(),
        })
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "status {}: {}", self.code, self.message)
    }
}

/// Outcome of a failed RPC: either a classified [Status] or an opaque error
/// that the transport renders as internal.
#[derive(Debug, Error)]
pub enum RpcError {
    #[error("{0}")]
    Status(Status),
    #[error(transparent)]
    Unclassified(CatalogError),
}

impl RpcError {
    /// Collapse into a [Status], classifying opaque errors as [Code::Internal]
    /// with the error's own text.
    pub fn into_status(self) -> Status {
        match self {
            RpcError::Status(status) => status,
            RpcError::Unclassified(err) => Status::new(Code::Internal, err.to_string()),
        }
    }
}

impl From<CatalogError> for RpcError {
    fn from(err: CatalogError) -> Self {
        translate(err)
    }
}

/// Map a domain error onto the wire error shape.
///
/// Errors without a code pass through untouched. For classified errors the
/// detail text is [CatalogError::details] when present, otherwise the error's
/// own message.
pub fn translate(err: CatalogError) -> RpcError {
    let Some(code) = err.code() else {
        return RpcError::Unclassified(err);
    };

    let details = err
        .details()
        .map(str::to_owned)
        .unwrap_or_else(|| err.to_string());

    let status = match code {
        Code::InvalidArgument => invalid_argument(err.field().unwrap_or_default(), details),
        _ => Status::new(code, details),
    };

    RpcError::Status(status)
}

fn invalid_argument(field: &str, details: String) -> Status {
    let message = if field.is_empty() {
        "The request is invalid.".to_string()
    } else {
        format!("Field \"{field}\" is invalid.")
    };

    let status = Status::new(Code::InvalidArgument, message);
    if field.is_empty() && details.is_empty() {
        return status;
    }

    status.with_detail(StatusDetail::BadRequest(BadRequest {
        field_violations: vec![FieldViolation {
            field: field.to_string(),
            description: details,
        }],
    }))
}
