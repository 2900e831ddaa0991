// UNRaf Academy - core/date.rs
//
// Lenient parsing of the ISO-like date strings carried by catalogue records
// and typed into date-range controls.
// Core layer: pure logic, no I/O.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Date-time layouts accepted in addition to a bare `YYYY-MM-DD`.
/// Only the calendar date is kept; range filters work at day granularity.
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
];

/// Parse an ISO-like date string into a calendar date.
///
/// Accepts `YYYY-MM-DD`, `YYYY-MM-DD HH:MM[:SS]`, `YYYY-MM-DDTHH:MM[:SS]`,
/// RFC 3339, `YYYY-MM` (first day of the month) and `YYYY` (1 January).
/// Returns `None` for anything else.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(date);
    }

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }

    parse_partial(s)
}

/// `YYYY-MM` and `YYYY` forms, which chrono cannot parse without a day.
fn parse_partial(s: &str) -> Option<NaiveDate> {
    let all_digits = |part: &str| !part.is_empty() && part.chars().all(|c| c.is_ascii_digit());

    match s.split_once('-') {
        Some((year, month)) if year.len() == 4 && month.len() == 2 => {
            if !all_digits(year) || !all_digits(month) {
                return None;
            }
            NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
        }
        None if s.len() == 4 && all_digits(s) => NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1),
        _ => None,
    }
}
