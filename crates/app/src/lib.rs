//! # Lotclock
//!
//! Deadline normalization and live countdowns for listing deadlines.
//!
//! The two entry points most callers need:
//! - [`resolve`] turns any supported deadline value into an absolute
//!   [`ResolvedInstant`], or `None` when there is nothing to count down to
//! - [`start_countdown`] emits a [`RemainingBreakdown`] immediately and then
//!   once per interval until expiry or [`CountdownHandle::stop`]
//!
//! The `lotclock` binary built from this crate wires both to the terminal.

pub mod cli;
pub mod runner;

pub use lotclock_common::time::{Clock, SystemClock};
pub use lotclock_core::{
    breakdown_at, format_remaining, resolve, resolve_with_reason, DeadlineResolver, TickSink,
    Unresolvable,
};
pub use lotclock_domain::{
    CountdownConfig, CountdownFormat, CountdownState, ListingDeadline, LotclockError, RawDeadline,
    RemainingBreakdown, ResolvedInstant,
};
pub use lotclock_infra::{
    start_countdown, start_countdown_with_clock, CountdownBinding, CountdownHandle,
    SchedulerError, SchedulerResult,
};
