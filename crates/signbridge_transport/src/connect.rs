//! Bounded connection attempts shared by the network transports.

use std::fmt::Display;
use std::future::Future;
use std::time::Duration;

use signbridge_foundation::{Error, Result};

/// Default bound on a single connection attempt.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Runs one connection attempt, failing with a transport error if it does
/// not finish within `timeout`.
pub(crate) async fn within<T, E, F>(endpoint: &str, timeout: Duration, attempt: F) -> Result<T>
where
    E: Display,
    F: Future<Output = std::result::Result<T, E>>,
{
    tokio::time::timeout(timeout, attempt)
        .await
        .map_err(|_| {
            Error::transport(format!(
                "timed out connecting to {endpoint} after {timeout:?}"
            ))
        })?
        .map_err(|e| Error::transport(format!("failed to connect to {endpoint}: {e}")))
}
