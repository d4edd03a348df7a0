//! Resolved instants

use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

/// A deadline expressed unambiguously as milliseconds since the Unix epoch.
///
/// "Unresolvable" is modelled as `Option::<ResolvedInstant>::None`, never as a
/// sentinel value inside this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ResolvedInstant(i64);

impl ResolvedInstant {
    /// Wrap a millisecond timestamp.
    pub const fn from_millis(millis: i64) -> Self {
        Self(millis)
    }

    /// Millisecond timestamp.
    pub const fn as_millis(self) -> i64 {
        self.0
    }

    /// Truncate a `DateTime` to whole milliseconds.
    pub fn from_datetime(datetime: DateTime<Utc>) -> Self {
        Self(datetime.timestamp_millis())
    }

    /// The calendar form, if the timestamp falls inside chrono's range.
    pub fn to_datetime(self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.0)
    }

    /// Signed milliseconds from `now` until this instant; negative once passed.
    pub const fn millis_after(self, now: Self) -> i64 {
        self.0.saturating_sub(now.0)
    }
}

impl fmt::Display for ResolvedInstant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Some(datetime) => f.write_str(&datetime.to_rfc3339_opts(SecondsFormat::Millis, true)),
            None => write!(f, "{}ms", self.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn displays_as_rfc3339_millis() {
        let instant = ResolvedInstant::from_millis(1_700_000_000_123);
        assert_eq!(instant.to_string(), "2023-11-14T22:13:20.123Z");
    }

    #[test]
    fn datetime_round_trip_truncates_sub_millisecond() {
        let datetime = Utc.with_ymd_and_hms(2030, 1, 1, 0, 0, 0).single().expect("valid date")
            + chrono::Duration::microseconds(1_999);

        let instant = ResolvedInstant::from_datetime(datetime);
        assert_eq!(instant.as_millis(), 1_893_456_000_001);
    }

    #[test]
    fn millis_after_is_signed() {
        let deadline = ResolvedInstant::from_millis(10_000);
        assert_eq!(deadline.millis_after(ResolvedInstant::from_millis(7_500)), 2_500);
        assert_eq!(deadline.millis_after(ResolvedInstant::from_millis(12_000)), -2_000);
    }
}
