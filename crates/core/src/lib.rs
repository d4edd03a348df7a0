//! # Lotclock Core
//!
//! Pure decision logic - no runtime or infrastructure dependencies.
//!
//! This crate contains:
//! - Deadline resolution: ambiguous raw values to absolute instants
//! - The countdown state machine and remaining-time breakdowns
//! - Output formatting
//! - The `TickSink` port through which ticks leave the engine
//!
//! ## Architecture Principles
//! - Only depends on `lotclock-common` and `lotclock-domain`
//! - No tokio, no timers, no I/O
//! - "Now" always comes in as an argument or through `Clock`

pub mod countdown;
pub mod deadline;

pub use countdown::{breakdown_at, format_remaining, Countdown, TickSink};
pub use deadline::{resolve, resolve_with_reason, DeadlineResolver, Unresolvable};
