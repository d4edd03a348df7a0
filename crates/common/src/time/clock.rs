//! Wall-clock abstraction for testability
//!
//! Countdown math only ever needs "milliseconds since the Unix epoch right
//! now". The [`Clock`] trait hides where that number comes from so the
//! resolver and the scheduler can be driven by real time in production and by
//! a controllable clock in tests.
//!
//! # Examples
//!
//! ```
//! # #[cfg(feature = "foundation")]
//! # {
//! use std::time::Duration;
//!
//! use lotclock_common::time::{Clock, MockClock, SystemClock};
//!
//! // Use system clock in production
//! let clock = SystemClock;
//! assert!(clock.now_millis() > 0);
//!
//! // Use mock clock in tests
//! let mock = MockClock::at_millis(1_000_000_000_000);
//! mock.advance(Duration::from_secs(5));
//! assert_eq!(mock.now_millis(), 1_000_000_005_000);
//! # }
//! ```

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Source of the current wall-clock time.
pub trait Clock: Send + Sync {
    /// Current wall-clock time.
    fn system_time(&self) -> SystemTime;

    /// Milliseconds since the Unix epoch.
    ///
    /// Times before the epoch come back negative rather than being clamped.
    fn now_millis(&self) -> i64 {
        system_time_to_millis(self.system_time())
    }
}

impl<C: Clock + ?Sized> Clock for Arc<C> {
    fn system_time(&self) -> SystemTime {
        (**self).system_time()
    }

    fn now_millis(&self) -> i64 {
        (**self).now_millis()
    }
}

/// Convert a [`SystemTime`] to signed milliseconds since the Unix epoch.
///
/// Saturates at `i64::MIN`/`i64::MAX` for times no calendar can represent.
pub fn system_time_to_millis(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(after) => i64::try_from(after.as_millis()).unwrap_or(i64::MAX),
        Err(before) => i64::try_from(before.duration().as_millis()).map_or(i64::MIN, |ms| -ms),
    }
}

fn millis_to_system_time(millis: i64) -> SystemTime {
    let offset = Duration::from_millis(millis.unsigned_abs());
    let shifted =
        if millis >= 0 { UNIX_EPOCH.checked_add(offset) } else { UNIX_EPOCH.checked_sub(offset) };
    shifted.unwrap_or(UNIX_EPOCH)
}

/// Real system clock implementation
///
/// Use this in production code.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn system_time(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Manually driven clock for deterministic tests.
///
/// Clones share the same underlying time, so a clone handed to the code under
/// test observes every [`advance`](MockClock::advance) made by the test.
#[derive(Debug, Clone)]
pub struct MockClock {
    millis: Arc<AtomicI64>,
}

impl MockClock {
    /// Create a mock clock pinned to the current real time.
    pub fn new() -> Self {
        Self::at_millis(SystemClock.now_millis())
    }

    /// Create a mock clock pinned to `millis` since the Unix epoch.
    pub fn at_millis(millis: i64) -> Self {
        Self { millis: Arc::new(AtomicI64::new(millis)) }
    }

    /// Move the clock forward without waiting.
    pub fn advance(&self, duration: Duration) {
        let delta = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        self.millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |ms| Some(ms.saturating_add(delta)))
            .ok();
    }

    /// Move the clock backwards, e.g. to simulate an NTP correction.
    pub fn rewind(&self, duration: Duration) {
        let delta = i64::try_from(duration.as_millis()).unwrap_or(i64::MAX);
        self.millis
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |ms| Some(ms.saturating_sub(delta)))
            .ok();
    }

    /// Pin the clock to an absolute instant.
    pub fn set_millis(&self, millis: i64) {
        self.millis.store(millis, Ordering::SeqCst);
    }
}

impl Default for MockClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MockClock {
    fn system_time(&self) -> SystemTime {
        millis_to_system_time(self.millis.load(Ordering::SeqCst))
    }

    fn now_millis(&self) -> i64 {
        self.millis.load(Ordering::SeqCst)
    }
}

/// Wall clock that follows the tokio timer.
///
/// The clock is anchored to a wall-clock reading and then advances with
/// `tokio::time::Instant`. Under `tokio::time::pause()` the runtime's
/// auto-advance moves this clock in lockstep with sleeping timers, so
/// interval-driven code observes consistent "now" values without real waits.
#[cfg(feature = "runtime")]
#[derive(Debug, Clone, Copy)]
pub struct RuntimeClock {
    base_millis: i64,
    origin: tokio::time::Instant,
}

#[cfg(feature = "runtime")]
impl RuntimeClock {
    /// Anchor to the current system time.
    pub fn new() -> Self {
        Self::anchored_at(SystemClock.now_millis())
    }

    /// Anchor so that "now" reads `base_millis` at the moment of creation.
    pub fn anchored_at(base_millis: i64) -> Self {
        Self { base_millis, origin: tokio::time::Instant::now() }
    }
}

#[cfg(feature = "runtime")]
impl Default for RuntimeClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "runtime")]
impl Clock for RuntimeClock {
    fn system_time(&self) -> SystemTime {
        millis_to_system_time(self.now_millis())
    }

    fn now_millis(&self) -> i64 {
        let elapsed = i64::try_from(self.origin.elapsed().as_millis()).unwrap_or(i64::MAX);
        self.base_millis.saturating_add(elapsed)
    }
}
