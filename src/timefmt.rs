//! Relative-time display formatting.
//!
//! Pure helpers for turning a millisecond timestamp into a human-readable
//! "time ago" label. The current time is always passed in explicitly so the
//! formatting is deterministic under test.

use std::time::{SystemTime, UNIX_EPOCH};

const MINUTE_MS: u64 = 60 * 1000;
const HOUR_MS: u64 = 60 * MINUTE_MS;
const DAY_MS: u64 = 24 * HOUR_MS;
const WEEK_MS: u64 = 7 * DAY_MS;

/// Returns the current time in milliseconds since the Unix epoch.
pub fn current_timestamp_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

/// Formats a timestamp relative to `now`.
///
/// An absent timestamp means "unknown" and renders as `"Just now"`. A
/// timestamp in the future (clock skew) is clamped to zero elapsed time.
/// Counts are rounded to the nearest whole unit, with a singular suffix
/// only when the rounded count equals 1. Anything a week or more in the
/// past falls back to an absolute UTC date.
pub fn format_relative_time(timestamp: Option<u64>, now: u64) -> String {
    let Some(ts) = timestamp else {
        return "Just now".to_string();
    };
    let diff = now.saturating_sub(ts);

    if diff < MINUTE_MS {
        return "moments ago".to_string();
    }
    if diff < HOUR_MS {
        return count_label(diff, MINUTE_MS, "minute");
    }
    if diff < DAY_MS {
        return count_label(diff, HOUR_MS, "hour");
    }
    if diff < WEEK_MS {
        return count_label(diff, DAY_MS, "day");
    }
    format_absolute_date(ts)
}

/// Rounds `diff` to the nearest multiple of `unit` and renders "N unit(s) ago".
fn count_label(diff: u64, unit: u64, name: &str) -> String {
    let count = (diff as f64 / unit as f64).round() as u64;
    let suffix = if count == 1 { "" } else { "s" };
    format!("{} {}{} ago", count, name, suffix)
}

/// Formats a millisecond timestamp as a UTC calendar date.
fn format_absolute_date(ts: u64) -> String {
    use chrono::{TimeZone, Utc};
    Utc.timestamp_millis_opt(ts as i64)
        .single()
        .map(|dt| dt.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| "Unknown".to_string())
}
