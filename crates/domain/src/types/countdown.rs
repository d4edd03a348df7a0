//! Countdown outputs and lifecycle

use serde::{Deserialize, Serialize};

use crate::constants::{
    MILLIS_PER_SECOND, SECONDS_PER_DAY, SECONDS_PER_HOUR, SECONDS_PER_MINUTE,
};
use crate::impl_label_conversions;

/// Time left until a deadline, split into calendar-free units.
///
/// Invariants: `hours < 24`, `minutes < 60`, `seconds < 60`. `is_expired` is
/// true iff the deadline was at or before "now" when the breakdown was taken;
/// an expired breakdown always has every unit at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemainingBreakdown {
    pub days: u64,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub is_expired: bool,
}

impl RemainingBreakdown {
    /// The breakdown reported once a deadline has passed.
    pub const EXPIRED: Self = Self { days: 0, hours: 0, minutes: 0, seconds: 0, is_expired: true };

    /// Build a breakdown from signed milliseconds remaining.
    ///
    /// Negative input is clamped to zero before decomposition. Partial seconds
    /// are floored, so 2 500 ms remaining reads as 2 seconds.
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn from_remaining_millis(remaining_ms: i64) -> Self {
        let clamped = if remaining_ms > 0 { remaining_ms } else { 0 };
        let total_seconds = clamped / MILLIS_PER_SECOND;

        Self {
            days: (total_seconds / SECONDS_PER_DAY) as u64,
            hours: ((total_seconds / SECONDS_PER_HOUR) % 24) as u8,
            minutes: ((total_seconds / SECONDS_PER_MINUTE) % 60) as u8,
            seconds: (total_seconds % 60) as u8,
            is_expired: remaining_ms <= 0,
        }
    }

    /// Whole seconds remaining.
    pub const fn total_seconds(&self) -> u64 {
        self.days * SECONDS_PER_DAY as u64
            + self.hours as u64 * SECONDS_PER_HOUR as u64
            + self.minutes as u64 * SECONDS_PER_MINUTE as u64
            + self.seconds as u64
    }
}

/// Lifecycle of a single countdown instance.
///
/// `Expired` and `Stopped` are terminal for the instance; a new deadline
/// always gets a fresh instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownState {
    /// No resolved instant; nothing to display.
    Idle,
    /// Ticking towards the instant.
    Running,
    /// The instant passed; ticking has ended.
    Expired,
    /// Cancelled by the owner.
    Stopped,
}

impl_label_conversions!(CountdownState {
    Idle => "idle",
    Running => "running",
    Expired => "expired",
    Stopped => "stopped",
});

impl CountdownState {
    /// True once no further tick can happen.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Expired | Self::Stopped)
    }
}

/// How a breakdown is rendered for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CountdownFormat {
    /// `HH:MM:SS`, with a `"<N>d "` prefix when days remain.
    #[default]
    Clock,
    /// `HHh MMm SSs`, with the same day prefix.
    Units,
}

impl_label_conversions!(CountdownFormat {
    Clock => "clock",
    Units => "units",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_partial_seconds() {
        let breakdown = RemainingBreakdown::from_remaining_millis(2_500);
        assert_eq!(
            breakdown,
            RemainingBreakdown { days: 0, hours: 0, minutes: 0, seconds: 2, is_expired: false }
        );
    }

    #[test]
    fn negative_remaining_clamps_to_expired() {
        assert_eq!(RemainingBreakdown::from_remaining_millis(-90_000), RemainingBreakdown::EXPIRED);
        assert_eq!(RemainingBreakdown::from_remaining_millis(0), RemainingBreakdown::EXPIRED);
    }

    #[test]
    fn sub_second_remaining_is_not_expired() {
        let breakdown = RemainingBreakdown::from_remaining_millis(400);
        assert_eq!(breakdown.total_seconds(), 0);
        assert!(!breakdown.is_expired);
    }

    #[test]
    fn decomposes_days_hours_minutes_seconds() {
        // 2d 3h 4m 5s
        let ms = ((2 * 86_400) + (3 * 3_600) + (4 * 60) + 5) * 1_000 + 999;

        let breakdown = RemainingBreakdown::from_remaining_millis(ms);

        assert_eq!((breakdown.days, breakdown.hours, breakdown.minutes, breakdown.seconds), (2, 3, 4, 5));
        assert_eq!(breakdown.total_seconds(), 183_845);
    }

    #[test]
    fn serializes_camel_case() {
        let json = serde_json::to_value(RemainingBreakdown::EXPIRED).expect("serializes");
        assert_eq!(json["isExpired"], serde_json::json!(true));
    }

    #[test]
    fn state_labels() {
        assert_eq!(CountdownState::Running.to_string(), "running");
        assert!(CountdownState::Stopped.is_terminal());
        assert!(!CountdownState::Idle.is_terminal());
        assert_eq!("Units".parse::<CountdownFormat>(), Ok(CountdownFormat::Units));
    }
}
