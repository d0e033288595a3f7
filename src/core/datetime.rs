//! Date and time helpers shared by the parser, the calendar and the CLI.

use chrono::{Datelike, Duration, Months, NaiveDate, NaiveDateTime, NaiveTime, Weekday};

use crate::error::ChronoError;

/// Days from `today` until the next `target` weekday, in `1..=7`.
///
/// A target equal to today's weekday yields a full week, never zero.
#[must_use]
pub fn days_until_next(today: NaiveDate, target: Weekday) -> i64 {
    let days = (i64::from(target.num_days_from_sunday())
        - i64::from(today.weekday().num_days_from_sunday())
        + 7)
        % 7;
    if days == 0 {
        7
    } else {
        days
    }
}

/// Shift a date by a number of days, or `None` past the representable range.
#[must_use]
pub fn add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    date.checked_add_signed(Duration::try_days(days)?)
}

/// First day of the month containing `date`.
#[must_use]
pub fn month_start(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// First day of the month `delta` months away from the one containing `date`.
#[must_use]
pub fn shift_month(date: NaiveDate, delta: i32) -> NaiveDate {
    let start = month_start(date);
    let shifted = if delta >= 0 {
        start.checked_add_months(Months::new(delta.unsigned_abs()))
    } else {
        start.checked_sub_months(Months::new(delta.unsigned_abs()))
    };
    shifted.unwrap_or(start)
}

/// Local midnight of `date`.
#[must_use]
pub fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

/// Parse an ISO 8601 calendar date (`2026-10-18`).
///
/// # Errors
///
/// Returns `ChronoError::InvalidInput` if the string is not a valid date.
pub fn parse_iso_date(input: &str) -> Result<NaiveDate, ChronoError> {
    NaiveDate::parse_from_str(input.trim(), "%Y-%m-%d")
        .map_err(|_| ChronoError::InvalidInput(format!("Expected a YYYY-MM-DD date, got '{input}'")))
}

/// Parse a `YYYY-MM` month into its first day.
///
/// # Errors
///
/// Returns `ChronoError::InvalidInput` if the string is not a valid month.
pub fn parse_year_month(input: &str) -> Result<NaiveDate, ChronoError> {
    let invalid = || ChronoError::InvalidInput(format!("Expected a YYYY-MM month, got '{input}'"));
    let (year, month) = input.trim().split_once('-').ok_or_else(invalid)?;
    let year: i32 = year.parse().map_err(|_| invalid())?;
    let month: u32 = month.parse().map_err(|_| invalid())?;
    NaiveDate::from_ymd_opt(year, month, 1).ok_or_else(invalid)
}

/// Parse a 24-hour `HH:MM` clock time.
///
/// # Errors
///
/// Returns `ChronoError::InvalidInput` if the string is not a valid time.
pub fn parse_clock(input: &str) -> Result<NaiveTime, ChronoError> {
    NaiveTime::parse_from_str(input.trim(), "%H:%M")
        .map_err(|_| ChronoError::InvalidInput(format!("Expected an HH:MM time, got '{input}'")))
}

/// Format a time as zero-padded 24-hour `HH:MM`.
#[must_use]
pub fn format_clock(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
}

/// Serde adapter storing a `NaiveTime` as `"HH:MM"`.
pub mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    /// Serialize as `HH:MM`.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_clock(*time))
    }

    /// Deserialize from `HH:MM` (seconds are accepted and dropped).
    ///
    /// # Errors
    ///
    /// Fails when the string is not a valid clock time.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        NaiveTime::parse_from_str(&s, "%H:%M")
            .or_else(|_| NaiveTime::parse_from_str(&s, "%H:%M:%S"))
            .map_err(serde::de::Error::custom)
    }
}
