//! Application constants
//!
//! Centralized location for all domain-level constants used throughout the
//! application.

// Numeric deadline heuristics. Values above the millisecond threshold are
// epoch milliseconds, values above the second threshold are epoch seconds,
// everything else is an offset in seconds from "now".
pub const EPOCH_MILLIS_THRESHOLD: f64 = 1e12;
pub const EPOCH_SECONDS_THRESHOLD: f64 = 1e9;

// Breakdown arithmetic
pub const MILLIS_PER_SECOND: i64 = 1_000;
pub const SECONDS_PER_MINUTE: i64 = 60;
pub const SECONDS_PER_HOUR: i64 = 3_600;
pub const SECONDS_PER_DAY: i64 = 86_400;

// Scheduler configuration
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 1_000;

// Rendering
pub const EXPIRED_LABEL: &str = "Expired";

// Listing record field names, in lookup order
pub const LISTING_DEADLINE_FIELDS: [&str; 3] = ["deadline", "expiryDate", "expiry_date"];
