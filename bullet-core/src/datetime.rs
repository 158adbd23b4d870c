//! Date and time cell parsing.
//!
//! The sheet exports dates as JavaScript `Date.toString()` output, e.g.
//! `Sat Jun 14 2025 00:00:00 GMT+1000 (Australian Eastern Standard Time)`.
//! Two string transforms make that shape parseable without a bespoke grammar:
//! drop the `GMT` token so the numeric offset stands alone, then cut the
//! parenthesised zone name.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

/// Start time used when a time cell cannot be read.
pub const DEFAULT_HOUR: u32 = 12;
pub const DEFAULT_MINUTE: u32 = 30;

/// Timestamp shapes carrying a numeric UTC offset.
const OFFSET_FORMATS: &[&str] = &["%a %b %d %Y %H:%M:%S %z", "%Y-%m-%d %H:%M:%S %z"];

/// Timestamp shapes without an offset.
const DATETIME_FORMATS: &[&str] = &[
    "%a %b %d %Y %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
];

/// Date-only shapes. Numeric dates are day-first.
const DATE_FORMATS: &[&str] = &[
    "%a %b %d %Y",
    "%Y-%m-%d",
    "%d/%m/%Y",
    "%d-%m-%Y",
    "%d %B %Y",
    "%d %b %Y",
    "%a %d %b %Y",
    "%A %d %B %Y",
    "%B %d %Y",
    "%b %d %Y",
    "%B %d, %Y",
    "%b %d, %Y",
];

const TIME_FORMATS: &[&str] = &[
    "%H:%M",
    "%H:%M:%S",
    "%I:%M%p",
    "%I:%M %p",
    "%I:%M:%S %p",
    "%H.%M",
];

/// The fallback start time, 12:30 PM.
pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(DEFAULT_HOUR, DEFAULT_MINUTE, 0).unwrap_or_default()
}

/// Remove every `GMT` token so an offset like `GMT+1000` reads as `+1000`.
pub fn strip_gmt_token(raw: &str) -> String {
    raw.replace("GMT", "")
}

/// Cut the string at the first `(`. Input without one is returned whole.
pub fn truncate_zone_name(raw: &str) -> &str {
    match raw.find('(') {
        Some(idx) => &raw[..idx],
        None => raw,
    }
}

/// Apply both cleanup steps and trim the result.
pub fn clean(raw: &str) -> String {
    let stripped = strip_gmt_token(raw);
    truncate_zone_name(&stripped).trim().to_string()
}

/// Parse a date cell. `None` means the row is not a schedule entry.
///
/// When the cell carries an offset, the calendar date as written is kept
/// rather than converting to another zone.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let cleaned = clean(raw);
    if cleaned.is_empty() {
        return None;
    }

    if let Some(stamp) = parse_timestamp(&cleaned) {
        return Some(stamp.date());
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(&cleaned, format) {
            return Some(date);
        }
    }

    // Relative phrases ("today", "next friday") have no place in a fixed
    // schedule, and header cells must not read as one.
    if !has_digit(&cleaned) {
        return None;
    }

    // Numeric dates are day-first only; a month-first reading would silently
    // mix orders within one column.
    if is_numeric_date(&cleaned) {
        return None;
    }

    fuzzydate::parse(&cleaned).ok().map(|dt| dt.date())
}

/// Parse a time cell, falling back to [`default_time`].
///
/// Accepts plain times (`18:00`, `6:00 pm`) as well as full timestamps, which
/// is how the sheet exports a time-formatted cell.
pub fn parse_time(raw: &str) -> NaiveTime {
    let trimmed = raw.trim();

    for format in TIME_FORMATS {
        if let Ok(time) = NaiveTime::parse_from_str(trimmed, format) {
            return time;
        }
    }

    if let Some(stamp) = parse_timestamp(&clean(trimmed)) {
        return stamp.time();
    }

    // Hand-typed forms like "6pm"; a digit is required so "now" stays out.
    if !has_digit(trimmed) {
        return default_time();
    }

    fuzzydate::parse(trimmed)
        .ok()
        .map(|dt| dt.time())
        .unwrap_or_else(default_time)
}

fn has_digit(s: &str) -> bool {
    s.bytes().any(|b| b.is_ascii_digit())
}

/// Digits and `/`, `-` or `.` separators only, e.g. `6/14/2025`.
fn is_numeric_date(s: &str) -> bool {
    s.bytes().any(|b| matches!(b, b'/' | b'-' | b'.'))
        && s.bytes().all(|b| b.is_ascii_digit() || matches!(b, b'/' | b'-' | b'.'))
}

/// Wall-clock timestamp from an already cleaned string.
fn parse_timestamp(cleaned: &str) -> Option<NaiveDateTime> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(cleaned) {
        return Some(dt.naive_local());
    }

    for format in OFFSET_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(cleaned, format) {
            return Some(dt.naive_local());
        }
    }

    DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(cleaned, format).ok())
}
