//! Countdown output port
//!
//! The engine pushes every breakdown it computes into a [`TickSink`]. Any
//! `Fn(RemainingBreakdown)` closure is a sink, so most callers never implement
//! the trait by hand.

use lotclock_domain::RemainingBreakdown;

/// Receiver of countdown ticks.
///
/// Calls for one countdown are strictly ordered and never overlap. A sink
/// may stop its own countdown from inside `on_tick`.
pub trait TickSink: Send + Sync {
    /// Receive the breakdown computed for this tick.
    fn on_tick(&self, breakdown: RemainingBreakdown);
}

impl<F> TickSink for F
where
    F: Fn(RemainingBreakdown) + Send + Sync,
{
    fn on_tick(&self, breakdown: RemainingBreakdown) {
        self(breakdown);
    }
}
