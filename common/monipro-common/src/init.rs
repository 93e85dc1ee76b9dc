//! Logging initialization
//!
//! Provides standardized tracing setup shared by every MoniPro binary.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing/logging
///
/// Sets up logging to stderr (stdout carries dashboard output) with:
/// - Formatted output without ANSI colors (for clean logs)
/// - Environment-based filtering via RUST_LOG
/// - A default level for the specified crate
///
/// Set `LOG_FORMAT=json` for structured JSON output.
/// Default is human-readable text output.
///
/// # Arguments
///
/// * `crate_name` - The crate whose events are enabled by default (e.g., "monipro")
/// * `default_level` - Level applied to that crate, e.g. "info" or "warn"
///
/// # Example
///
/// ```rust,ignore
/// monipro_common::init_tracing("monipro", "info")?;
/// ```
pub fn init_tracing(crate_name: &str, default_level: &str) -> anyhow::Result<()> {
    let directive = format!("{}={}", crate_name, default_level);
    let filter = EnvFilter::from_default_env().add_directive(directive.parse()?);

    let registry = tracing_subscriber::registry().with(filter);
    let json = json_logs_requested();

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init()?;
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_writer(std::io::stderr)
                    .with_ansi(false),
            )
            .try_init()?;
    }

    tracing::debug!(crate_name, default_level, json, "Tracing initialized");
    Ok(())
}

fn json_logs_requested() -> bool {
    std::env::var("LOG_FORMAT")
        .map(|v| v.eq_ignore_ascii_case("json"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_init_is_an_error() {
        // Only one global subscriber per process; the first call may race with
        // other tests, so just check the second one reports failure.
        let _ = init_tracing("monipro_common", "debug");
        assert!(init_tracing("monipro_common", "debug").is_err());
    }
}
