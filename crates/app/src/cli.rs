//! Command-line arguments for the `lotclock` binary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use lotclock_domain::{
    CountdownConfig, CountdownFormat, ListingDeadline, LotclockError, RawDeadline,
};
use lotclock_infra::config;

/// Live countdown to a listing deadline
#[derive(Parser, Debug)]
#[command(name = "lotclock", author, version, about)]
pub struct Args {
    /// Deadline: epoch seconds or milliseconds, seconds from now, or a date
    #[arg(required_unless_present = "listing", conflicts_with = "listing")]
    pub deadline: Option<String>,

    /// Read the deadline from a JSON listing record
    #[arg(long, value_name = "FILE")]
    pub listing: Option<PathBuf>,

    /// Milliseconds between ticks
    #[arg(long, value_name = "N")]
    pub interval_ms: Option<u64>,

    /// Output format (clock or units)
    #[arg(long)]
    pub format: Option<CountdownFormat>,

    /// Configuration file (JSON or TOML)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Args {
    /// Loads configuration and applies command-line overrides on top.
    ///
    /// An explicit `--config` file replaces the usual environment and
    /// probed-file lookup.
    pub fn load_config(&self) -> lotclock_domain::Result<CountdownConfig> {
        let loaded = match &self.config {
            Some(path) => config::load_from_file(Some(path.clone()))?,
            None => config::load()?,
        };
        Ok(self.apply_overrides(loaded))
    }

    pub fn apply_overrides(&self, mut config: CountdownConfig) -> CountdownConfig {
        if let Some(interval_ms) = self.interval_ms {
            config.tick_interval_ms = interval_ms;
        }
        if let Some(format) = self.format {
            config.format = format;
        }
        config
    }

    /// The deadline value to count down to, from the positional argument or
    /// the listing record.
    pub fn raw_deadline(&self) -> anyhow::Result<RawDeadline> {
        if let Some(path) = &self.listing {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read listing {}", path.display()))?;
            let record: serde_json::Value = serde_json::from_str(&contents)
                .with_context(|| format!("listing {} is not valid JSON", path.display()))?;
            if !record.is_object() {
                return Err(LotclockError::InvalidInput(format!(
                    "listing {} is not a JSON object",
                    path.display()
                ))
                .into());
            }
            return Ok(ListingDeadline::from_record(&record).into_raw());
        }

        Ok(self.deadline.as_deref().map_or(RawDeadline::Missing, RawDeadline::from))
    }
}
