//! Per-call deadlines.
//!
//! A [CallContext] carries the time budget of one RPC. Work run through
//! [CallContext::run] is dropped when the budget elapses; for store queries
//! dropping the future cancels the in-flight statement.

use std::future::Future;
use std::time::Duration;

use crate::error::CatalogError;

/// Longest value accepted in a `grpc-timeout` header.
const MAX_TIMEOUT_DIGITS: usize = 8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CallContext {
    timeout: Option<Duration>,
}

impl CallContext {
    /// A context without a deadline.
    pub fn background() -> Self {
        Self { timeout: None }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self {
            timeout: Some(timeout),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Drive `fut` to completion, failing with [CatalogError::DeadlineExceeded]
    /// if the deadline passes first.
    pub async fn run<T, F>(&self, fut: F) -> Result<T, CatalogError>
    where
        F: Future<Output = Result<T, CatalogError>>,
    {
        match self.timeout {
            Some(timeout) => tokio::time::timeout(timeout, fut)
                .await
                .map_err(|_| CatalogError::DeadlineExceeded(timeout))?,
            None => fut.await,
        }
    }
}

/// Parse a `grpc-timeout` header value such as `5S`, `250m` or `1H`.
///
/// The value is one to eight ASCII digits followed by a unit: `H` hours,
/// `M` minutes, `S` seconds, `m` milliseconds, `u` microseconds, `n` nanoseconds.
pub fn parse_grpc_timeout(value: &str) -> Option<Duration> {
    let value = value.trim();
    let unit = value.chars().last()?;
    let digits = &value[..value.len() - unit.len_utf8()];

    if digits.is_empty()
        || digits.len() > MAX_TIMEOUT_DIGITS
        || !digits.bytes().all(|b| b.is_ascii_digit())
    {
        return None;
    }
    let amount: u64 = digits.parse().ok()?;

    match unit {
        'H' => Some(Duration::from_secs(amount * 60 * 60)),
        'M' => Some(Duration::from_secs(amount * 60)),
        'S' => Some(Duration::from_secs(amount)),
        'm' => Some(Duration::from_millis(amount)),
        'u' => Some(Duration::from_micros(amount)),
        'n' => Some(Duration::from_nanos(amount)),
        _ => None,
    }
}
