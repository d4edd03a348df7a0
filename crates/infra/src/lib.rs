//! # Lotclock Infrastructure
//!
//! Runtime adapters around the pure countdown engine.
//!
//! This crate contains:
//! - Tokio-driven countdown scheduling and deadline bindings
//! - Configuration loading from environment variables and files
//! - Tracing subscriber setup
//!
//! ## Architecture
//! - Drives the state machine and ports defined in `lotclock-core`
//! - Contains all "impure" code (timers, environment, file I/O)

pub mod config;
pub mod observability;
pub mod scheduling;

// Re-export commonly used items
pub use scheduling::{
    start_countdown, start_countdown_with_clock, CountdownBinding, CountdownHandle,
    SchedulerError, SchedulerResult,
};
