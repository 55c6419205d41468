//! Global `tracing` subscriber setup.

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

/// Installs the global subscriber.
///
/// `log_level` is an `EnvFilter` directive string such as `info` or
/// `url_shortener=debug,tower_http=info`. `log_format` is `text` or `json`.
///
/// # Errors
///
/// Fails if the directive string does not parse or a subscriber is already set.
pub fn init(log_level: &str, log_format: &str) -> Result<()> {
    let filter = EnvFilter::try_new(log_level)
        .with_context(|| format!("Invalid log filter '{}'", log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    let result = if log_format == "json" {
        builder.json().with_current_span(false).try_init()
    } else {
        builder.try_init()
    };

    result.map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))
}
