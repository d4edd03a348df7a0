//! Cancellable recurring timers
//!
//! A [`TimerHandle`] is the liveness flag of one timer task. Cancellation is
//! synchronous: once [`TimerHandle::cancel`] returns, the callback is not
//! running and will never run again, even if the timer wakeup was already
//! queued on the runtime.

use std::ops::ControlFlow;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::ReentrantMutex;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;
use tracing::trace;

/// A timer handle that can be used to cancel a timer
///
/// Clones refer to the same timer. A handle is never re-armed: once
/// cancelled it stays cancelled.
#[derive(Debug, Clone)]
pub struct TimerHandle {
    cancelled: CancellationToken,
    gate: Arc<ReentrantMutex<()>>,
}

impl TimerHandle {
    /// Create a new, live timer handle
    pub fn new() -> Self {
        Self { cancelled: CancellationToken::new(), gate: Arc::new(ReentrantMutex::new(())) }
    }

    /// Cancel the timer
    ///
    /// Blocks until a callback running on another worker has returned. The
    /// gate is re-entrant, so a callback may cancel its own timer.
    pub fn cancel(&self) {
        self.cancelled.cancel();
        drop(self.gate.lock());
    }

    /// Check if the timer has been cancelled
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.is_cancelled()
    }

    /// Run `f` only while the timer is live.
    ///
    /// The liveness check and `f` both happen under the gate, so `f` can never
    /// overlap with or follow a completed [`cancel`](Self::cancel).
    pub fn run_if_live<R>(&self, f: impl FnOnce() -> R) -> Option<R> {
        let _guard = self.gate.lock();
        if self.is_cancelled() {
            return None;
        }
        Some(f())
    }

    /// Resolves once the timer is cancelled.
    pub async fn cancelled(&self) {
        self.cancelled.cancelled().await;
    }
}

impl Default for TimerHandle {
    fn default() -> Self {
        Self::new()
    }
}

/// Create a recurring timer on the current tokio runtime
///
/// The first callback fires one `period` after the call (the caller is
/// expected to have done any immediate work itself). Missed ticks are skipped
/// rather than replayed in a burst. The loop ends when `handle` is cancelled
/// or the callback returns [`ControlFlow::Break`].
///
/// Must be called from within a tokio runtime.
///
/// # Examples
///
/// ```no_run
/// # #[cfg(feature = "runtime")]
/// # {
/// use std::ops::ControlFlow;
/// use std::time::Duration;
///
/// use lotclock_common::time::timer::{recurring, TimerHandle};
///
/// #[tokio::main]
/// async fn main() {
///     let handle = TimerHandle::new();
///     let mut remaining = 3;
///     let task = recurring(Duration::from_secs(1), handle.clone(), move || {
///         remaining -= 1;
///         if remaining == 0 { ControlFlow::Break(()) } else { ControlFlow::Continue(()) }
///     });
///
///     task.await.ok();
/// }
/// # }
/// ```
pub fn recurring<F>(period: Duration, handle: TimerHandle, mut callback: F) -> JoinHandle<()>
where
    F: FnMut() -> ControlFlow<()> + Send + 'static,
{
    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            tokio::select! {
                biased;
                () = handle.cancelled() => {
                    trace!("recurring timer cancelled");
                    break;
                }
                _ = interval.tick() => {
                    match handle.run_if_live(&mut callback) {
                        Some(ControlFlow::Continue(())) => {}
                        Some(ControlFlow::Break(())) => {
                            trace!("recurring timer finished");
                            break;
                        }
                        None => break,
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    //! Unit tests for time::timer.
    use std::sync::atomic::{AtomicU32, Ordering};

    use super::*;

    /// Validates `TimerHandle::new` behavior for the timer handle cancel
    /// scenario.
    ///
    /// Assertions:
    /// - Ensures `!handle.is_cancelled()` evaluates to true.
    /// - Ensures `handle.is_cancelled()` evaluates to true.
    #[test]
    fn test_timer_handle_cancel() {
        let handle = TimerHandle::new();
        assert!(!handle.is_cancelled());

        handle.cancel();
        assert!(handle.is_cancelled());
        assert_eq!(handle.run_if_live(|| 1), None);
    }

    /// A callback may cancel its own timer without deadlocking on the gate.
    #[test]
    fn test_cancel_from_inside_callback() {
        let handle = TimerHandle::new();
        let inner = handle.clone();

        let ran = handle.run_if_live(|| inner.cancel());

        assert_eq!(ran, Some(()));
        assert!(handle.is_cancelled());
    }

    #[tokio::test(start_paused = true)]
    async fn test_recurring_skips_immediate_tick() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();
        let handle = TimerHandle::new();

        let _task = recurring(Duration::from_millis(100), handle.clone(), move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });

        tokio::time::sleep(Duration::from_millis(50)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(300)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 3);

        handle.cancel();
    }

    #[tokio::test(start_paused = true)]
    async fn test_recurring_stops_on_break() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();

        let task = recurring(Duration::from_millis(10), TimerHandle::new(), move || {
            let fired = counter_clone.fetch_add(1, Ordering::SeqCst) + 1;
            if fired == 2 {
                ControlFlow::Break(())
            } else {
                ControlFlow::Continue(())
            }
        });

        task.await.expect("timer task joins");
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(counter.load(Ordering::SeqCst), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_recurring_cancelled() {
        let counter = Arc::new(AtomicU32::new(0));
        let counter_clone = counter.clone();
        let handle = TimerHandle::new();

        let task = recurring(Duration::from_millis(50), handle.clone(), move || {
            counter_clone.fetch_add(1, Ordering::SeqCst);
            ControlFlow::Continue(())
        });

        handle.cancel();
        tokio::time::sleep(Duration::from_millis(200)).await;

        // Should not have fired because it was cancelled
        assert_eq!(counter.load(Ordering::SeqCst), 0);
        assert!(task.is_finished());
    }
}
