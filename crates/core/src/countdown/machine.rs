//! Countdown state machine
//!
//! ```text
//! Idle --arm--> Running --tick (expired)--> Expired
//!   |              |
//!   +----stop------+-----------------------> Stopped
//! ```
//!
//! The machine knows nothing about timers. Whoever drives it samples the
//! clock, calls [`Countdown::tick`], and stops driving once the returned
//! breakdown is expired or the machine reports a terminal state.

use lotclock_domain::{CountdownState, RemainingBreakdown, ResolvedInstant};

/// Breakdown of the time left until `instant` as seen at `now`.
pub const fn breakdown_at(instant: ResolvedInstant, now: ResolvedInstant) -> RemainingBreakdown {
    RemainingBreakdown::from_remaining_millis(instant.millis_after(now))
}

/// A single countdown towards one resolved instant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Countdown {
    instant: Option<ResolvedInstant>,
    state: CountdownState,
    ticks: u64,
}

impl Countdown {
    /// Create an unarmed countdown.
    pub const fn new(instant: Option<ResolvedInstant>) -> Self {
        Self { instant, state: CountdownState::Idle, ticks: 0 }
    }

    /// Move from `Idle` to `Running` and take the first sample.
    ///
    /// Returns `None` without changing anything when there is no instant or
    /// the countdown was already armed or stopped.
    pub fn arm(&mut self, now: ResolvedInstant) -> Option<RemainingBreakdown> {
        if self.state != CountdownState::Idle || self.instant.is_none() {
            return None;
        }
        self.state = CountdownState::Running;
        self.tick(now)
    }

    /// Sample the countdown at `now`.
    ///
    /// Only a running countdown produces a breakdown. The sample that first
    /// reports expiry is still returned, and moves the machine to `Expired`.
    pub fn tick(&mut self, now: ResolvedInstant) -> Option<RemainingBreakdown> {
        if self.state != CountdownState::Running {
            return None;
        }
        let breakdown = breakdown_at(self.instant?, now);

        self.ticks += 1;
        if breakdown.is_expired {
            self.state = CountdownState::Expired;
        }
        Some(breakdown)
    }

    /// Cancel the countdown.
    ///
    /// Returns true if this call changed the state. An expired countdown
    /// stays expired.
    pub fn stop(&mut self) -> bool {
        match self.state {
            CountdownState::Idle | CountdownState::Running => {
                self.state = CountdownState::Stopped;
                true
            }
            CountdownState::Expired | CountdownState::Stopped => false,
        }
    }

    pub const fn state(&self) -> CountdownState {
        self.state
    }

    pub const fn is_active(&self) -> bool {
        matches!(self.state, CountdownState::Running)
    }

    /// Breakdowns produced so far.
    pub const fn ticks(&self) -> u64 {
        self.ticks
    }

    pub const fn instant(&self) -> Option<ResolvedInstant> {
        self.instant
    }
}
