//! Log output for the `signbridge` binary.
//!
//! Diagnostics go to stderr so that stdout carries only glosses and replies.

use signbridge_foundation::{Error, Result};
use tracing_subscriber::EnvFilter;

/// Filter used by `-v`.
pub const VERBOSE_FILTER: &str = "debug";

/// Filter used by `-vv` and above.
pub const TRACE_FILTER: &str = "trace";

/// Picks the filter directive from the verbosity count and configured filter.
///
/// Any `-v` flag wins over the configured directive.
#[must_use]
pub fn filter_directive(verbose: u8, configured: &str) -> &str {
    match verbose {
        0 => configured,
        1 => VERBOSE_FILTER,
        _ => TRACE_FILTER,
    }
}

/// Installs the global `tracing` subscriber.
///
/// # Errors
///
/// Returns a configuration error if `directive` does not parse or a
/// subscriber is already installed.
pub fn init(directive: &str) -> Result<()> {
    let filter = EnvFilter::try_new(directive)
        .map_err(|e| Error::config(format!("invalid log filter '{directive}': {e}")))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| Error::config(format!("failed to install logger: {e}")))
}
