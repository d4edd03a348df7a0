//! Integration tests for the `time` module.
//!
//! These tests drive recurring timers against the runtime clock under paused
//! tokio time, and check that shared clocks stay in agreement.

#![cfg(feature = "runtime")]

use std::ops::ControlFlow;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use lotclock_common::time::{recurring, Clock, MockClock, RuntimeClock, TimerHandle};

const BASE_MS: i64 = 1_000_000_000_000;

/// Validates that the runtime clock advances in lockstep with a recurring
/// timer.
///
/// Assertions:
/// - The first callback runs one period after `recurring` is called
/// - Each callback reads "now" exactly one period later than the previous one
/// - Returning `Break` ends the task
#[tokio::test(start_paused = true)]
async fn test_recurring_timer_follows_runtime_clock() {
    let clock = RuntimeClock::anchored_at(BASE_MS);
    let readings = Arc::new(Mutex::new(Vec::new()));

    let seen = Arc::clone(&readings);
    let task = recurring(Duration::from_secs(1), TimerHandle::new(), move || {
        let mut seen = seen.lock().expect("readings lock");
        seen.push(clock.now_millis() - BASE_MS);
        if seen.len() == 3 {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    });

    task.await.expect("timer task completes");

    assert_eq!(*readings.lock().expect("readings lock"), vec![1_000, 2_000, 3_000]);
}

/// Validates that cancelling through a cloned handle ends the timer task.
#[tokio::test(start_paused = true)]
async fn test_cancel_through_clone_ends_task() {
    let handle = TimerHandle::new();
    let fired = Arc::new(AtomicU32::new(0));

    let counter = Arc::clone(&fired);
    let task = recurring(Duration::from_millis(500), handle.clone(), move || {
        counter.fetch_add(1, Ordering::SeqCst);
        ControlFlow::Continue(())
    });

    tokio::time::sleep(Duration::from_millis(1_250)).await;
    let canceller = handle.clone();
    canceller.cancel();
    task.await.expect("timer task completes");
    tokio::time::sleep(Duration::from_secs(5)).await;

    assert!(handle.is_cancelled());
    assert_eq!(fired.load(Ordering::SeqCst), 2);
}

/// Validates that clocks shared through `Arc` observe the same adjustments.
#[test]
fn test_shared_mock_clock_agrees() {
    let clock = Arc::new(MockClock::at_millis(BASE_MS));
    let observer: Arc<dyn Clock> = clock.clone();

    clock.advance(Duration::from_millis(2_500));
    assert_eq!(observer.now_millis(), BASE_MS + 2_500);

    clock.rewind(Duration::from_secs(10));
    assert_eq!(observer.now_millis(), BASE_MS - 7_500);
}
