//! Countdown scheduler
//!
//! Drives a [`Countdown`] on the tokio runtime: one synchronous emission
//! when the countdown starts, then one emission per interval until the
//! deadline passes or the handle is stopped.
//!
//! # Example
//!
//! ```no_run
//! use std::time::Duration;
//!
//! use lotclock_domain::{RemainingBreakdown, ResolvedInstant};
//! use lotclock_infra::scheduling::start_countdown;
//!
//! # async fn example() -> lotclock_infra::scheduling::SchedulerResult<()> {
//! let deadline = Some(ResolvedInstant::from_millis(1_893_456_000_000));
//! let mut handle = start_countdown(
//!     deadline,
//!     |breakdown: RemainingBreakdown| println!("{}s left", breakdown.total_seconds()),
//!     Duration::from_secs(1),
//! )?;
//!
//! // ... later, on teardown
//! handle.stop();
//! handle.wait().await;
//! # Ok(())
//! # }
//! ```

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use lotclock_common::time::{recurring, Clock, SystemClock, TimerHandle};
use lotclock_core::{Countdown, TickSink};
use lotclock_domain::constants::DEFAULT_TICK_INTERVAL_MS;
use lotclock_domain::{CountdownState, ResolvedInstant};
use parking_lot::Mutex;
use tokio::task::JoinHandle;
use tracing::{debug, info, instrument, trace, warn};

use crate::scheduling::error::{SchedulerError, SchedulerResult};

/// Start a countdown towards `resolved`, sampling the system clock.
///
/// See [`start_countdown_with_clock`].
///
/// # Errors
/// Returns [`SchedulerError::NoRuntime`] if the countdown would tick but no
/// tokio runtime is available.
pub fn start_countdown(
    resolved: Option<ResolvedInstant>,
    on_tick: impl TickSink + 'static,
    interval: Duration,
) -> SchedulerResult<CountdownHandle> {
    start_countdown_with_clock(resolved, on_tick, interval, SystemClock)
}

/// Start a countdown towards `resolved`, sampling `clock`.
///
/// - `None`: the handle is `Idle` and `on_tick` is never called.
/// - Otherwise the first breakdown is delivered before this returns. If it
///   is already expired the handle is `Expired` and no task is spawned.
/// - Otherwise a task ticks every `interval` until expiry or
///   [`CountdownHandle::stop`]. A zero interval falls back to the default.
///
/// # Errors
/// Returns [`SchedulerError::NoRuntime`] if the countdown would tick but no
/// tokio runtime is available. Nothing is emitted in that case.
#[instrument(skip(on_tick, clock))]
pub fn start_countdown_with_clock<C>(
    resolved: Option<ResolvedInstant>,
    on_tick: impl TickSink + 'static,
    interval: Duration,
    clock: C,
) -> SchedulerResult<CountdownHandle>
where
    C: Clock + 'static,
{
    let mut countdown = Countdown::new(resolved);
    let Some(instant) = resolved else {
        debug!("no resolved instant; countdown idle");
        return Ok(CountdownHandle::detached(countdown));
    };

    let now = sample(&clock);
    let remaining_ms = instant.millis_after(now);
    if remaining_ms > 0 && tokio::runtime::Handle::try_current().is_err() {
        return Err(SchedulerError::NoRuntime);
    }

    let Some(first) = countdown.arm(now) else {
        return Ok(CountdownHandle::detached(countdown));
    };
    on_tick.on_tick(first);

    if first.is_expired {
        info!(instant_ms = instant.as_millis(), remaining_ms, "countdown already expired");
        return Ok(CountdownHandle::detached(countdown));
    }

    let period = normalize_interval(interval);
    let countdown = Arc::new(Mutex::new(countdown));
    let timer = TimerHandle::new();

    let shared = Arc::clone(&countdown);
    let task = recurring(period, timer.clone(), move || {
        let now = sample(&clock);
        let sampled = shared.lock().tick(now);
        let Some(breakdown) = sampled else {
            return ControlFlow::Break(());
        };

        on_tick.on_tick(breakdown);
        trace!(remaining_s = breakdown.total_seconds(), "countdown tick");

        if breakdown.is_expired {
            let ticks = shared.lock().ticks();
            info!(instant_ms = instant.as_millis(), ticks, "countdown expired");
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    debug!(
        instant_ms = instant.as_millis(),
        remaining_ms,
        interval_ms = u64::try_from(period.as_millis()).unwrap_or(u64::MAX),
        "countdown armed"
    );

    Ok(CountdownHandle { countdown, timer, task: Some(task) })
}

fn sample(clock: &impl Clock) -> ResolvedInstant {
    ResolvedInstant::from_millis(clock.now_millis())
}

fn normalize_interval(interval: Duration) -> Duration {
    if interval.is_zero() {
        warn!(
            default_ms = DEFAULT_TICK_INTERVAL_MS,
            "zero tick interval requested; using default"
        );
        Duration::from_millis(DEFAULT_TICK_INTERVAL_MS)
    } else {
        interval
    }
}

/// Owner of one running countdown.
///
/// Dropping the handle stops the countdown.
#[derive(Debug)]
pub struct CountdownHandle {
    countdown: Arc<Mutex<Countdown>>,
    timer: TimerHandle,
    task: Option<JoinHandle<()>>,
}

impl CountdownHandle {
    fn detached(countdown: Countdown) -> Self {
        Self { countdown: Arc::new(Mutex::new(countdown)), timer: TimerHandle::new(), task: None }
    }

    /// Stop the countdown.
    ///
    /// Once this returns `on_tick` will not be called again, even if a tick
    /// was already due. Safe to call repeatedly and from inside `on_tick`.
    /// An expired countdown stays expired.
    #[instrument(skip(self))]
    pub fn stop(&self) {
        let changed = self.countdown.lock().stop();
        self.timer.cancel();

        if changed {
            debug!(ticks = self.tick_count(), "countdown stopped");
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> CountdownState {
        self.countdown.lock().state()
    }

    /// True while ticks are still being delivered.
    pub fn is_active(&self) -> bool {
        self.countdown.lock().is_active()
    }

    /// Breakdowns delivered so far, including the synchronous first one.
    pub fn tick_count(&self) -> u64 {
        self.countdown.lock().ticks()
    }

    /// The instant this countdown runs towards.
    pub fn instant(&self) -> Option<ResolvedInstant> {
        self.countdown.lock().instant()
    }

    /// Wait for the tick task to finish, i.e. until expiry or stop.
    ///
    /// Returns immediately for countdowns that never spawned a task, and on
    /// every call after the first.
    pub async fn wait(&mut self) {
        if let Some(task) = self.task.take() {
            if let Err(err) = task.await {
                warn!(error = %err, "countdown task ended abnormally");
            }
        }
    }
}

impl Drop for CountdownHandle {
    fn drop(&mut self) {
        if self.is_active() {
            debug!("CountdownHandle dropped while running; stopping");
        }
        self.stop();
    }
}
