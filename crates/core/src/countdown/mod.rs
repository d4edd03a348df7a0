//! Countdown logic
//!
//! - [`machine`]: the per-instance state machine, driven by "now" samples
//! - [`format`]: rendering a breakdown for display
//! - [`ports`]: where ticks are delivered

pub mod format;
pub mod machine;
pub mod ports;

pub use format::format_remaining;
pub use machine::{breakdown_at, Countdown};
pub use ports::TickSink;
