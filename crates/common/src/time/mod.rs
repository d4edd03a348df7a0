//! Time utilities and abstractions
//!
//! - **[`clock`]**: wall-clock abstraction; real, manual and runtime-driven
//!   clocks
//! - **[`timer`]**: cancellable recurring timers (`runtime` feature)
//!
//! ## Usage
//!
//! ```rust
//! # #[cfg(feature = "foundation")]
//! # {
//! use std::time::Duration;
//!
//! use lotclock_common::time::{Clock, MockClock};
//!
//! let clock = MockClock::at_millis(0);
//! clock.advance(Duration::from_secs(5));
//! assert_eq!(clock.now_millis(), 5_000);
//! # }
//! ```

pub mod clock;
#[cfg(feature = "runtime")]
pub mod timer;

// Re-export commonly used items
#[cfg(feature = "runtime")]
pub use clock::RuntimeClock;
pub use clock::{system_time_to_millis, Clock, MockClock, SystemClock};
#[cfg(feature = "runtime")]
pub use timer::{recurring, TimerHandle};
