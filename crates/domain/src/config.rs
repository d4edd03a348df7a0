//! Configuration management

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_TICK_INTERVAL_MS;
use crate::types::CountdownFormat;

/// Countdown runner configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CountdownConfig {
    /// Milliseconds between ticks. Zero falls back to the default at start.
    pub tick_interval_ms: u64,
    pub format: CountdownFormat,
    pub log: LogConfig,
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when `RUST_LOG` is unset.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl CountdownConfig {
    /// The tick interval as a `Duration`.
    pub const fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }
}

impl Default for CountdownConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            format: CountdownFormat::default(),
            log: LogConfig::default(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_string(), json: false }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn partial_json_fills_defaults() {
        let config: CountdownConfig =
            serde_json::from_str(r#"{ "format": "units" }"#).expect("deserializes");

        assert_eq!(config.format, CountdownFormat::Units);
        assert_eq!(config.tick_interval(), Duration::from_secs(1));
        assert_eq!(config.log, LogConfig::default());
    }
}
