//! Tracing subscriber setup shared by the Lambda binaries.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "info";

/// Installs a plain-text subscriber writing to stdout for CloudWatch.
///
/// Timestamps are left to CloudWatch; every handler line already carries its
/// own ISO-8601 prefix. `RUST_LOG` overrides the default filter. Calling this
/// more than once keeps the first subscriber.
pub fn init_tracing() {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .without_time()
        .try_init();

    if installed.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}
