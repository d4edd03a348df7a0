//! Scheduling infrastructure for countdown ticks
//!
//! - [`countdown_scheduler`]: `start_countdown` and the [`CountdownHandle`]
//!   that owns one tick task
//! - [`binding`]: [`CountdownBinding`], re-arming a countdown when its
//!   deadline value changes
//!
//! Lifecycle rules:
//! - Each countdown owns its task's join handle and cancellation token
//! - Cancellation is synchronous; no tick is delivered after `stop` returns
//! - Dropping a handle stops its countdown

pub mod binding;
pub mod countdown_scheduler;
pub mod error;

pub use binding::CountdownBinding;
pub use countdown_scheduler::{start_countdown, start_countdown_with_clock, CountdownHandle};
pub use error::{SchedulerError, SchedulerResult};
