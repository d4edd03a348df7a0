//! # Lotclock Domain
//!
//! Domain types for listing deadlines and countdowns.
//!
//! This crate contains:
//! - Deadline values as supplied by listing feeds (`RawDeadline`,
//!   `ListingDeadline`)
//! - Resolved instants and remaining-time breakdowns
//! - Countdown lifecycle states and display formats
//! - Configuration structures, constants and the domain error type
//!
//! ## Architecture
//! - No dependencies on other Lotclock crates
//! - Only external dependencies allowed
//! - Pure domain models and data structures

pub mod config;
pub mod constants;
pub mod errors;
pub mod macros;
pub mod types;

// Re-export commonly used items
pub use config::*;
pub use errors::*;
pub use types::*;
