//! Tracing subscriber bootstrap.

use anyhow::Context;
use tracing_subscriber::EnvFilter;

/// Install the global `fmt` subscriber filtered by `filter`.
///
/// Logs go to stderr; stdout is reserved for clock output.
///
/// # Errors
///
/// Fails when `filter` is not a valid directive or a subscriber is
/// already installed.
pub fn init(filter: &str) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(filter)
        .with_context(|| format!("invalid logging filter {filter:?}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow::anyhow!(err))
        .context("failed to install tracing subscriber")
}
