//! Rendering remaining time for display.

use lotclock_domain::constants::EXPIRED_LABEL;
use lotclock_domain::{CountdownFormat, RemainingBreakdown};

/// Render `breakdown` in the given format.
///
/// An expired breakdown is always `"Expired"`. Otherwise the units are zero
/// padded and prefixed with `"<N>d "` when at least one full day remains:
///
/// ```
/// use lotclock_core::format_remaining;
/// use lotclock_domain::{CountdownFormat, RemainingBreakdown};
///
/// let breakdown = RemainingBreakdown { days: 2, hours: 3, minutes: 4, seconds: 5, is_expired: false };
/// assert_eq!(format_remaining(&breakdown, CountdownFormat::Clock), "2d 03:04:05");
/// assert_eq!(format_remaining(&breakdown, CountdownFormat::Units), "2d 03h 04m 05s");
/// ```
pub fn format_remaining(breakdown: &RemainingBreakdown, format: CountdownFormat) -> String {
    if breakdown.is_expired {
        return EXPIRED_LABEL.to_string();
    }

    let RemainingBreakdown { days, hours, minutes, seconds, .. } = *breakdown;
    let prefix = if days > 0 { format!("{days}d ") } else { String::new() };

    match format {
        CountdownFormat::Clock => format!("{prefix}{hours:02}:{minutes:02}:{seconds:02}"),
        CountdownFormat::Units => format!("{prefix}{hours:02}h {minutes:02}m {seconds:02}s"),
    }
}
