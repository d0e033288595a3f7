//! Relative date resolution.

use chrono::NaiveDate;

use super::keywords::{first_match, DateCue, DATE_RULES};
use crate::core::{add_days, days_until_next};

/// Find the date cue in lowercased `text`, if any.
#[must_use]
pub fn find_date_cue(text: &str) -> Option<DateCue> {
    first_match(DATE_RULES, text)
}

/// Resolve a cue against `today`.
///
/// A cue that would step past the last representable date resolves to
/// `today`.
#[must_use]
pub fn resolve_cue(cue: DateCue, today: NaiveDate) -> NaiveDate {
    let offset = match cue {
        DateCue::Today => 0,
        DateCue::Tomorrow => 1,
        DateCue::Weekday(target) => days_until_next(today, target),
        DateCue::NextWeek => 7,
    };
    add_days(today, offset).unwrap_or(today)
}
