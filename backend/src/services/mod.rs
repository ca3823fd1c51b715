//! RPC service implementations

pub mod racing;
pub mod sports;

use tracing::{error, warn};

use crate::error::CatalogError;
use crate::rpc::{RpcError, translate};

pub use racing::{RacesRepo, RacingService};
pub use sports::{EventStore, SportsService};

/// Log a failed call and translate its error for the wire.
///
/// Classified errors are expected client-facing outcomes and log at `warn`;
/// anything else is unexpected and logs at `error`.
pub(crate) fn reject(service: &str, method: &str, err: CatalogError) -> RpcError {
    match err.code() {
        Some(code) => warn!(service, method, code = %code, error = %err, "Request rejected"),
        None => error!(service, method, error = %err, "Request failed"),
    }
    translate(err)
}
