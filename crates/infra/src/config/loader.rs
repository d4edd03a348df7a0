//! Configuration loader
//!
//! Loads countdown configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. If `LOTCLOCK_TICK_INTERVAL_MS` is set, load from environment variables
//! 2. Otherwise probe the standard paths for a config file
//! 3. If no file exists either, use defaults
//!
//! ## Environment Variables
//! - `LOTCLOCK_TICK_INTERVAL_MS`: Milliseconds between ticks
//! - `LOTCLOCK_FORMAT`: `clock` or `units`
//! - `LOTCLOCK_LOG_LEVEL`: Log filter used when `RUST_LOG` is unset
//! - `LOTCLOCK_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./lotclock.json` or `./lotclock.toml` (current working directory)
//! 2. `./config/lotclock.json` or `./config/lotclock.toml`
//! 3. The same two layouts relative to the executable's directory

use std::path::{Path, PathBuf};

use lotclock_domain::{CountdownConfig, CountdownFormat, LogConfig, LotclockError, Result};

pub const ENV_TICK_INTERVAL_MS: &str = "LOTCLOCK_TICK_INTERVAL_MS";
pub const ENV_FORMAT: &str = "LOTCLOCK_FORMAT";
pub const ENV_LOG_LEVEL: &str = "LOTCLOCK_LOG_LEVEL";
pub const ENV_LOG_JSON: &str = "LOTCLOCK_LOG_JSON";

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `LotclockError::Config` if the environment carries invalid
/// values, or a probed config file cannot be read or parsed.
pub fn load() -> Result<CountdownConfig> {
    if std::env::var_os(ENV_TICK_INTERVAL_MS).is_some() {
        let config = load_from_env()?;
        tracing::info!("Configuration loaded from environment variables");
        return Ok(config);
    }

    match probe_config_paths() {
        Some(path) => load_from_file(Some(path)),
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(CountdownConfig::default())
        }
    }
}

/// Load configuration from environment variables
///
/// `LOTCLOCK_TICK_INTERVAL_MS` is required; the other variables fall back to
/// their defaults when unset.
///
/// # Errors
/// Returns `LotclockError::Config` if the interval is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<CountdownConfig> {
    let tick_interval_ms = env_var(ENV_TICK_INTERVAL_MS).and_then(|s| {
        s.trim()
            .parse::<u64>()
            .map_err(|e| LotclockError::Config(format!("Invalid tick interval: {e}")))
    })?;

    let format = match std::env::var(ENV_FORMAT) {
        Ok(value) => value.parse::<CountdownFormat>().map_err(LotclockError::Config)?,
        Err(_) => CountdownFormat::default(),
    };

    let defaults = LogConfig::default();
    let log = LogConfig {
        level: std::env::var(ENV_LOG_LEVEL).unwrap_or(defaults.level),
        json: env_bool(ENV_LOG_JSON, defaults.json),
    };

    Ok(CountdownConfig { tick_interval_ms, format, log })
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML, detected by file extension.
///
/// # Errors
/// Returns `LotclockError::Config` if:
/// - File not found (when path is specified)
/// - No config file found (when path is `None`)
/// - File format is invalid
pub fn load_from_file(path: Option<PathBuf>) -> Result<CountdownConfig> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(LotclockError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            LotclockError::Config(
                "No config file found in any of the standard locations".to_string(),
            )
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| LotclockError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by file extension (`.json` or `.toml`); files with
/// no extension are read as JSON.
fn parse_config(contents: &str, path: &Path) -> Result<CountdownConfig> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| LotclockError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| LotclockError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(LotclockError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Probe the standard paths for a configuration file
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        candidates.extend(candidates_in(&cwd));
    }

    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            candidates.extend(candidates_in(exe_dir));
        }
    }

    candidates.into_iter().find(|path| path.is_file())
}

fn candidates_in(dir: &Path) -> [PathBuf; 4] {
    [
        dir.join("lotclock.json"),
        dir.join("lotclock.toml"),
        dir.join("config").join("lotclock.json"),
        dir.join("config").join("lotclock.toml"),
    ]
}

/// Get required environment variable
fn env_var(key: &str) -> Result<String> {
    std::env::var(key).map_err(|_| {
        LotclockError::Config(format!("Missing required environment variable: {key}"))
    })
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
