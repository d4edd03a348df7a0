//! Deadline resolver
//!
//! Resolution rules, first match wins:
//!
//! 1. Missing, `null` or whitespace-only text: unresolvable.
//! 2. An absolute date-time: its instant, truncated to milliseconds.
//! 3. A finite number (or text that trims to one):
//!    - above `1e12`: epoch milliseconds
//!    - above `1e9`: epoch seconds
//!    - otherwise: seconds from "now"
//! 4. Other text: calendar parsing, zone-less forms read as UTC.
//! 5. Anything else: unresolvable.
//!
//! Fractional milliseconds are floored. Results outside the calendar range
//! chrono can represent are unresolvable.

use lotclock_common::time::Clock;
use lotclock_domain::constants::{
    EPOCH_MILLIS_THRESHOLD, EPOCH_SECONDS_THRESHOLD, MILLIS_PER_SECOND,
};
use lotclock_domain::{RawDeadline, ResolvedInstant};
use thiserror::Error;
use tracing::debug;

use super::parse::{parse_datetime, parse_number};

/// 2^63, the first `f64` above `i64::MAX`.
const I64_LIMIT: f64 = 9_223_372_036_854_775_808.0;

/// Why a raw deadline produced no instant.
///
/// This is a diagnostic, not a failure: callers that only need the instant
/// use [`resolve`], which maps every reason to `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Unresolvable {
    #[error("deadline is missing or empty")]
    Missing,

    #[error("deadline is not a finite number")]
    NotFinite,

    #[error("deadline falls outside the representable date range")]
    OutOfRange,

    #[error("deadline text is neither numeric nor a recognised date")]
    Unparseable,

    #[error("deadline value has an unsupported type")]
    Unsupported,
}

/// Resolve `raw` against `now`.
///
/// Pure: the same `(raw, now)` pair always gives the same result. Relative
/// offsets are anchored to the `now` passed in, so callers re-resolving a
/// relative value get a fresh deadline each time.
pub fn resolve(raw: &RawDeadline, now: ResolvedInstant) -> Option<ResolvedInstant> {
    resolve_with_reason(raw, now).ok()
}

/// Resolve `raw` against `now`, reporting why resolution failed.
///
/// # Errors
/// Returns the [`Unresolvable`] reason naming the rule that rejected the
/// input.
pub fn resolve_with_reason(
    raw: &RawDeadline,
    now: ResolvedInstant,
) -> Result<ResolvedInstant, Unresolvable> {
    let outcome = match raw {
        RawDeadline::Missing => Err(Unresolvable::Missing),
        RawDeadline::Instant(datetime) => Ok(ResolvedInstant::from_datetime(*datetime)),
        RawDeadline::Number(value) => resolve_number(*value, now),
        RawDeadline::Text(text) => resolve_text(text, now),
        RawDeadline::Unsupported(_) => Err(Unresolvable::Unsupported),
    };

    if let Err(reason) = &outcome {
        debug!(raw = ?raw, reason = %reason, "deadline unresolvable");
    }

    outcome
}

fn resolve_text(text: &str, now: ResolvedInstant) -> Result<ResolvedInstant, Unresolvable> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(Unresolvable::Missing);
    }

    if let Some(value) = parse_number(trimmed) {
        return resolve_number(value, now);
    }

    let datetime = parse_datetime(trimmed).ok_or(Unresolvable::Unparseable)?;
    Ok(ResolvedInstant::from_datetime(datetime))
}

#[allow(clippy::cast_precision_loss)]
fn resolve_number(value: f64, now: ResolvedInstant) -> Result<ResolvedInstant, Unresolvable> {
    if !value.is_finite() {
        return Err(Unresolvable::NotFinite);
    }

    let millis_per_second = MILLIS_PER_SECOND as f64;
    let millis = if value > EPOCH_MILLIS_THRESHOLD {
        floor_to_millis(value)?
    } else if value > EPOCH_SECONDS_THRESHOLD {
        floor_to_millis(value * millis_per_second)?
    } else {
        let offset = floor_to_millis(value * millis_per_second)?;
        now.as_millis().checked_add(offset).ok_or(Unresolvable::OutOfRange)?
    };

    let instant = ResolvedInstant::from_millis(millis);
    if instant.to_datetime().is_none() {
        return Err(Unresolvable::OutOfRange);
    }
    Ok(instant)
}

#[allow(clippy::cast_possible_truncation)]
fn floor_to_millis(value: f64) -> Result<i64, Unresolvable> {
    let floored = value.floor();
    if (-I64_LIMIT..I64_LIMIT).contains(&floored) {
        Ok(floored as i64)
    } else {
        Err(Unresolvable::OutOfRange)
    }
}

/// Resolver bound to a clock.
///
/// Reads the clock exactly once per [`resolve_now`](Self::resolve_now) call.
#[derive(Debug, Clone)]
pub struct DeadlineResolver<C> {
    clock: C,
}

impl<C: Clock> DeadlineResolver<C> {
    /// Create a resolver reading "now" from `clock`.
    pub const fn new(clock: C) -> Self {
        Self { clock }
    }

    /// The clock's current reading.
    pub fn now(&self) -> ResolvedInstant {
        ResolvedInstant::from_millis(self.clock.now_millis())
    }

    /// Resolve `raw` against the clock's current reading.
    pub fn resolve_now(&self, raw: &RawDeadline) -> Option<ResolvedInstant> {
        resolve(raw, self.now())
    }

    /// Borrow the underlying clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }
}
