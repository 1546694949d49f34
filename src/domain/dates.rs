// src/domain/dates.rs
//
// Date normalization for raw roster cells. Spreadsheet exports mix serial
// numbers with locale-dependent text, so everything here degrades to
// "no date" instead of failing.

use crate::domain::record::CellValue;
use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime};

/// Days between the legacy spreadsheet epoch (1899-12-30, day 0 of the
/// convention that includes the fictitious 1900 leap day) and 1970-01-01.
const SERIAL_UNIX_OFFSET: i64 = 25569;

/// Unambiguous text formats tried before the day-first fallback.
/// Deliberately excludes `%m/%d/%Y` and friends: slash-separated dates in
/// this data are day-first and must reach the second stage untouched.
const GENERAL_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d",
    "%Y/%m/%d",
    "%d %b %Y",
    "%d %B %Y",
    "%b %d, %Y",
    "%B %d, %Y",
];

const GENERAL_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S"];

/// Converts a spreadsheet day-count serial to a calendar date.
/// Fractional parts (time of day) are discarded.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() {
        return None;
    }
    let days = serial.floor() as i64 - SERIAL_UNIX_OFFSET;
    NaiveDate::from_ymd_opt(1970, 1, 1)?.checked_add_signed(Duration::try_days(days)?)
}

/// Stage 1: general-purpose parsing of unambiguous calendar formats.
fn parse_general(s: &str) -> Option<NaiveDate> {
    for fmt in GENERAL_DATE_FORMATS {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return Some(d);
        }
    }
    for fmt in GENERAL_DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt.date());
        }
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.date_naive());
    }
    None
}

/// Stage 2: `D/M/YYYY` or `D-M-YYYY`, day first (the source data's
/// regional convention), year exactly four digits. Calendar validity is
/// checked by chrono, so `31/02/2025` still comes back as `None`.
fn parse_day_first(s: &str) -> Option<NaiveDate> {
    let mut parts = s.splitn(3, ['/', '-']);
    let day = parts.next()?.trim();
    let month = parts.next()?.trim();
    let year = parts.next()?.trim();
    if day.is_empty() || day.len() > 2 || month.is_empty() || month.len() > 2 || year.len() != 4 {
        return None;
    }
    let day: u32 = day.parse().ok()?;
    let month: u32 = month.parse().ok()?;
    let year: i32 = year.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Normalizes a raw cell into a calendar date, or `None` when the cell is
/// blank or unparseable. Never panics; a bad cell is not an error.
pub fn normalize(value: &CellValue) -> Option<NaiveDate> {
    match value {
        CellValue::Empty => None,
        CellValue::Number(n) => serial_to_date(*n),
        CellValue::Text(s) => {
            let s = s.trim();
            if s.is_empty() {
                return None;
            }
            parse_general(s).or_else(|| parse_day_first(s))
        }
    }
}

/// Whole days from `today` to `target`. Both are calendar dates already,
/// so no time-of-day can leak into the count.
pub fn days_until(target: NaiveDate, today: NaiveDate) -> i64 {
    target.signed_duration_since(today).num_days()
}

/// Display form used in reports: `DD/MM/YYYY`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}
