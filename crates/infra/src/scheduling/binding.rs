//! Deadline-bound countdowns
//!
//! A [`CountdownBinding`] belongs to one consumer (a listing card, a CLI
//! session) and keeps exactly one countdown alive for the deadline value it
//! was last given. Rebinding the same value is a no-op; a different value
//! stops the old countdown before the new one arms, so a stale tick can never
//! reach the sink after a change.

use std::sync::Arc;
use std::time::Duration;

use lotclock_common::time::Clock;
use lotclock_core::{DeadlineResolver, TickSink};
use lotclock_domain::{CountdownState, RawDeadline, RemainingBreakdown};
use tracing::{debug, instrument};

use crate::scheduling::countdown_scheduler::{start_countdown_with_clock, CountdownHandle};
use crate::scheduling::error::SchedulerResult;

/// Keeps one countdown in step with a changing deadline value.
///
/// Dropping the binding stops its countdown.
pub struct CountdownBinding<C, S> {
    resolver: DeadlineResolver<C>,
    sink: Arc<S>,
    interval: Duration,
    bound: Option<RawDeadline>,
    handle: Option<CountdownHandle>,
}

impl<C, S> CountdownBinding<C, S>
where
    C: Clock + Clone + 'static,
    S: TickSink + 'static,
{
    /// Create an unbound binding.
    pub fn new(clock: C, sink: S, interval: Duration) -> Self {
        Self {
            resolver: DeadlineResolver::new(clock),
            sink: Arc::new(sink),
            interval,
            bound: None,
            handle: None,
        }
    }

    /// Bind to `raw`, re-arming only if the value changed.
    ///
    /// "Now" is read once, when the new value is resolved. An unresolvable
    /// value leaves the binding `Idle`.
    ///
    /// # Errors
    /// Returns [`SchedulerError::NoRuntime`](crate::scheduling::SchedulerError::NoRuntime)
    /// if the new countdown needs to tick outside a tokio runtime. The
    /// binding is left unbound.
    #[instrument(skip(self))]
    pub fn bind(&mut self, raw: RawDeadline) -> SchedulerResult<CountdownState> {
        if self.bound.as_ref() == Some(&raw) {
            return Ok(self.state());
        }

        self.unbind();

        let resolved = self.resolver.resolve_now(&raw);
        let sink = Arc::clone(&self.sink);
        let handle = start_countdown_with_clock(
            resolved,
            move |breakdown: RemainingBreakdown| sink.on_tick(breakdown),
            self.interval,
            self.resolver.clock().clone(),
        )?;

        let state = handle.state();
        debug!(state = %state, "deadline bound");

        self.bound = Some(raw);
        self.handle = Some(handle);
        Ok(state)
    }

    /// Stop the current countdown and forget the bound value.
    pub fn unbind(&mut self) {
        if let Some(handle) = self.handle.take() {
            handle.stop();
        }
        self.bound = None;
    }

    /// State of the current countdown; `Idle` when nothing is bound.
    pub fn state(&self) -> CountdownState {
        self.handle.as_ref().map_or(CountdownState::Idle, CountdownHandle::state)
    }

    /// The value currently bound, if any.
    pub const fn bound(&self) -> Option<&RawDeadline> {
        self.bound.as_ref()
    }

    /// The current countdown, if any.
    pub const fn handle(&self) -> Option<&CountdownHandle> {
        self.handle.as_ref()
    }

    /// Mutable access to the current countdown, e.g. to [`wait`](CountdownHandle::wait) on it.
    pub fn handle_mut(&mut self) -> Option<&mut CountdownHandle> {
        self.handle.as_mut()
    }
}

#[cfg(test)]
mod tests {
    use lotclock_common::time::MockClock;

    use super::*;

    fn binding() -> CountdownBinding<MockClock, impl TickSink + 'static> {
        CountdownBinding::new(
            MockClock::at_millis(1_000_000_000_000),
            |_: RemainingBreakdown| {},
            Duration::from_secs(1),
        )
    }

    #[test]
    fn unbound_is_idle() {
        let binding = binding();
        assert_eq!(binding.state(), CountdownState::Idle);
        assert!(binding.bound().is_none());
    }

    #[test]
    fn unresolvable_value_is_idle_and_remembered() {
        let mut binding = binding();

        assert_eq!(binding.bind(RawDeadline::from("whenever")), Ok(CountdownState::Idle));
        assert_eq!(binding.bound(), Some(&RawDeadline::from("whenever")));
    }

    #[test]
    fn expired_value_needs_no_runtime() {
        let mut binding = binding();

        assert_eq!(binding.bind(RawDeadline::from(-10)), Ok(CountdownState::Expired));

        binding.unbind();
        assert_eq!(binding.state(), CountdownState::Idle);
        assert!(binding.bound().is_none());
    }
}
