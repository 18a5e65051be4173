//! Time normalization: 12-hour and 24-hour wall-clock strings are compared
//! as a minute-of-day integer. Entry creation requires the 12-hour form;
//! legacy rows may still carry untransformed 24-hour values.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveTime, Timelike};
use regex::Regex;
use std::sync::LazyLock;

/// 12-hour wall-clock pattern, e.g. "09:05 PM" or "12:08am".
static TWELVE_HOUR_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(0?[1-9]|1[0-2]):([0-5][0-9])\s?(AM|PM)$").unwrap()
});

/// True iff `value` is a well-formed 12-hour time. This is the format
/// required when a new entry is created.
pub fn is_valid_12_hour(value: &str) -> bool {
    TWELVE_HOUR_RE.is_match(value.trim())
}

/// Normalize a wall-clock string to its minute of day (0..=1439).
///
/// Accepts the 12-hour form ("HH:MM AM/PM", 12 AM = 0, 12 PM = 720) and the
/// 24-hour form ("HH:MM"). Anything else is rejected with
/// [`AppError::MalformedTime`]; no sentinel values are returned.
pub fn parse_to_minutes(value: &str) -> AppResult<u32> {
    let v = value.trim();

    if let Some(caps) = TWELVE_HOUR_RE.captures(v) {
        let hour: u32 = caps[1]
            .parse()
            .map_err(|_| AppError::MalformedTime(value.to_string()))?;
        let minute: u32 = caps[2]
            .parse()
            .map_err(|_| AppError::MalformedTime(value.to_string()))?;

        // Hour 12 wraps to 0 so that 12 AM is midnight and 12 PM is noon.
        let mut minutes = (hour % 12) * 60 + minute;
        if caps[3].eq_ignore_ascii_case("PM") {
            minutes += 720;
        }
        return Ok(minutes);
    }

    if let Ok(t) = NaiveTime::parse_from_str(v, "%H:%M") {
        return Ok(t.hour() * 60 + t.minute());
    }

    Err(AppError::MalformedTime(value.to_string()))
}

/// Render a stored time in 12-hour form for display.
///
/// Idempotent: values already carrying AM/PM pass through unchanged, and so
/// do values that match neither notation. Display of previously accepted
/// data must never fail.
pub fn to_display_12_hour(value: &str) -> String {
    let v = value.trim();
    let upper = v.to_ascii_uppercase();
    if upper.contains("AM") || upper.contains("PM") {
        return v.to_string();
    }

    match NaiveTime::parse_from_str(v, "%H:%M") {
        Ok(t) => {
            let (h, m) = (t.hour(), t.minute());
            let meridiem = if h >= 12 { "PM" } else { "AM" };
            let hour12 = match h % 12 {
                0 => 12,
                other => other,
            };
            format!("{:02}:{:02} {}", hour12, m, meridiem)
        }
        Err(_) => v.to_string(),
    }
}
