//! Text parsing helpers for deadline values.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Offset-carrying layouts not covered by RFC 3339/2822.
///
/// The last one is JavaScript's `Date.prototype.toString()` output once the
/// trailing zone name is stripped.
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%a %b %d %Y %H:%M:%S GMT%z",
];

/// Zone-less layouts, read as UTC. `%.f` also accepts a missing fraction.
/// Month names match both full and abbreviated spellings.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y/%m/%d %H:%M",
    "%b %d, %Y %H:%M:%S",
    "%b %d, %Y %H:%M",
];

/// Date-only layouts, read as UTC midnight.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%b %d, %Y", "%d %b %Y"];

/// Parse already-trimmed text as a finite number.
///
/// `inf` and `NaN` spellings are rejected here so they fall through to date
/// parsing (and fail there).
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Parse already-trimmed text as a calendar date-time.
pub(crate) fn parse_datetime(text: &str) -> Option<DateTime<Utc>> {
    let text = strip_zone_name(text);

    if let Ok(parsed) = DateTime::parse_from_rfc3339(text) {
        return Some(parsed.with_timezone(&Utc));
    }
    if let Ok(parsed) = DateTime::parse_from_rfc2822(text) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in OFFSET_FORMATS {
        if let Ok(parsed) = DateTime::parse_from_str(text, format) {
            return Some(parsed.with_timezone(&Utc));
        }
    }

    for format in NAIVE_FORMATS {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(text, format) {
            return Some(parsed.and_utc());
        }
    }

    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|midnight| midnight.and_utc())
}

/// Drop a trailing ` (Zone Name)` as appended by `Date.prototype.toString()`.
fn strip_zone_name(text: &str) -> &str {
    match text.strip_suffix(')').and_then(|rest| rest.rsplit_once(" (")) {
        Some((head, _)) => head.trim_end(),
        None => text,
    }
}
