//! Domain errors raised by the repositories and services.
//!
//! Every failure inside the crate is a [CatalogError]. A variant may hint at the
//! protocol status that best represents it ([CatalogError::code]), name the
//! offending request field ([CatalogError::field]) and carry a human-readable
//! explanation ([CatalogError::details]). Errors without a code are opaque and
//! end up as internal errors on the wire; see [crate::rpc::status::translate].

use std::time::Duration;

use thiserror::Error;

use crate::rpc::status::Code;

#[derive(Debug, Error)]
pub enum CatalogError {
    /// The client supplied a malformed or out-of-range argument.
    #[error("invalid argument \"{field}\", {details}")]
    InvalidArgument { field: String, details: String },

    /// A lookup by identifier matched nothing.
    #[error("{message}")]
    NotFound { message: String },

    /// The call did not finish before its deadline.
    #[error("deadline exceeded after {0:?}")]
    DeadlineExceeded(Duration),

    /// Store or driver failure, surfaced with the driver's own text.
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    /// A stored timestamp could not be converted.
    #[error("invalid timestamp {value:?}: {reason}")]
    Timestamp { value: String, reason: String },
}

impl CatalogError {
    pub fn invalid_argument(field: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field: field.into(),
            details: details.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Status code this error hints at, if it is a classified error.
    pub fn code(&self) -> Option<Code> {
        match self {
            Self::InvalidArgument { .. } => Some(Code::InvalidArgument),
            Self::NotFound { .. } => Some(Code::NotFound),
            Self::DeadlineExceeded(_) => Some(Code::DeadlineExceeded),
            Self::Database(_) | Self::Timestamp { .. } => None,
        }
    }

    /// Name of the request field the error is attributed to.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { field, .. } => Some(field),
            _ => None,
        }
    }

    /// Explanation distinct from the terse field name.
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::InvalidArgument { details, .. } => Some(details),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_argument_exposes_all_capabilities() {
        let err = CatalogError::invalid_argument("orderBy", "orderBy field is required.");

        assert_eq!(err.code(), Some(Code::InvalidArgument));
        assert_eq!(err.field(), Some("orderBy"));
        assert_eq!(err.details(), Some("orderBy field is required."));
        assert_eq!(
            err.to_string(),
            "invalid argument \"orderBy\", orderBy field is required."
        );
    }

    #[test]
    fn test_not_found_has_code_but_no_field() {
        let err = CatalogError::not_found("Race with ID 7 does not exist.");

        assert_eq!(err.code(), Some(Code::NotFound));
        assert_eq!(err.field(), None);
        assert_eq!(err.details(), None);
        assert_eq!(err.to_string(), "Race with ID 7 does not exist.");
    }

    #[test]
    fn test_store_errors_are_unclassified() {
        let err = CatalogError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.code(), None);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());

        let err = CatalogError::Timestamp {
            value: "yesterday".to_string(),
            reason: "bad input".to_string(),
        };
        assert_eq!(err.code(), None);
    }
}
