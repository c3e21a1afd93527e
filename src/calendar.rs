//! Calendar helpers shared by the generator and the dashboard filters
//!
//! Covers day iteration, ISO week bucketing, and the "YYYY-MM" month key
//! the dashboard groups visits by.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::error::{EdSynthError, Result};

const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Iterate every calendar day from `start` to `end`, both inclusive
///
/// Yields nothing when `end < start`.
pub fn days_inclusive(start: NaiveDate, end: NaiveDate) -> impl Iterator<Item = NaiveDate> {
    start.iter_days().take_while(move |day| *day <= end)
}

/// Whether the date falls on a Saturday or Sunday
#[must_use]
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Calendar year paired with the ISO week number of a date
///
/// The year is the calendar year, not the ISO week-based year, so
/// 2024-12-30 maps to `(2024, 1)`.
#[must_use]
pub fn year_and_iso_week(date: NaiveDate) -> (i32, u32) {
    (date.year(), date.iso_week().week())
}

/// "YYYY-MM" grouping key of a date
#[must_use]
pub fn year_month(date: NaiveDate) -> String {
    format!("{:04}-{:02}", date.year(), date.month())
}

/// Parse a "YYYY-MM" key into year and month
pub fn parse_year_month(key: &str) -> Result<(i32, u32)> {
    let (year, month) = key
        .split_once('-')
        .ok_or_else(|| EdSynthError::validation(format!("Invalid month key '{key}', expected YYYY-MM")))?;

    let year: i32 = year
        .parse()
        .map_err(|_| EdSynthError::validation(format!("Invalid year in month key '{key}'")))?;
    let month: u32 = month
        .parse()
        .map_err(|_| EdSynthError::validation(format!("Invalid month in month key '{key}'")))?;

    if !(1..=12).contains(&month) {
        return Err(EdSynthError::validation(format!(
            "Month {month} out of range in key '{key}'"
        )));
    }

    Ok((year, month))
}

/// Human-readable name of a month key, e.g. "2024-01" → "January 2024"
pub fn month_display_name(key: &str) -> Result<String> {
    let (year, month) = parse_year_month(key)?;
    Ok(format!("{} {year}", MONTH_NAMES[(month - 1) as usize]))
}

/// Number of days in the given month
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| EdSynthError::validation(format!("Invalid month {year}-{month}")))?;
    let next_first = if month == 12 {
        NaiveDate::from_ymd_opt(year + 1, 1, 1)
    } else {
        NaiveDate::from_ymd_opt(year, month + 1, 1)
    }
    .ok_or_else(|| EdSynthError::validation(format!("Month after {year}-{month} is out of range")))?;

    Ok(next_first.signed_duration_since(first).num_days() as u32)
}

/// Approximate ISO week block for a calendar month
///
/// Returns `(start_week, end_week)` with `start_week = (month - 1) * 4 + 1`
/// and `end_week = start_week + 4`; the block is half-open.
#[must_use]
pub const fn week_block(month: u32) -> (u32, u32) {
    let start_week = month.saturating_sub(1) * 4 + 1;
    (start_week, start_week + 4)
}
