//! Tracing subscriber setup
//!
//! Logs always go to stderr. Stdout is reserved for rendered countdown
//! output.

use lotclock_domain::{LogConfig, LotclockError, Result};
use tracing_subscriber::EnvFilter;

/// Build the event filter: `RUST_LOG` when set, otherwise `fallback`.
///
/// # Errors
/// Returns `LotclockError::Config` if `RUST_LOG` is unset and `fallback` is
/// not a valid filter directive.
pub fn build_filter(fallback: &str) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env().or_else(|_| {
        EnvFilter::try_new(fallback)
            .map_err(|e| LotclockError::Config(format!("Invalid log filter '{fallback}': {e}")))
    })
}

/// Install the global tracing subscriber.
///
/// # Errors
/// Returns `LotclockError::Config` for an invalid filter and
/// `LotclockError::Internal` if a global subscriber is already installed.
pub fn init_tracing(config: &LogConfig) -> Result<()> {
    let filter = build_filter(&config.level)?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false);

    let installed = if config.json { builder.json().try_init() } else { builder.try_init() };

    installed.map_err(|e| LotclockError::Internal(format!("Failed to install tracing subscriber: {e}")))
}

#[cfg(test)]
mod tests {
    use serial_test::serial;
    use tracing_subscriber::filter::LevelFilter;

    use super::*;

    #[test]
    #[serial]
    fn test_fallback_level_used_without_rust_log() {
        std::env::remove_var("RUST_LOG");

        let filter = build_filter("debug").expect("valid directive");
        assert_eq!(filter.max_level_hint(), Some(LevelFilter::DEBUG));
    }

    #[test]
    #[serial]
    fn test_invalid_fallback_is_config_error() {
        std::env::remove_var("RUST_LOG");

        let err = build_filter("lotclock=loud").expect_err("invalid level");
        assert!(matches!(err, LotclockError::Config(_)));
    }

    #[test]
    #[serial]
    fn test_second_init_is_rejected() {
        std::env::remove_var("RUST_LOG");
        let config = LogConfig::default();

        let _ = init_tracing(&config);
        let second = init_tracing(&config);

        assert!(matches!(second, Err(LotclockError::Internal(_))));
    }
}
