//! Clock time extraction.

use chrono::NaiveTime;
use once_cell::sync::Lazy;
use regex::Regex;

// Hour, optional :MM, optional meridiem. First match anywhere wins.
// ASCII digits only; `\d` would also match other scripts' digits.
static TIME_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)([0-9]{1,2})(?::([0-9]{2}))?\s*(am|pm)?")
        .unwrap_or_else(|e| panic!("Invalid time regex: {e}"))
});

/// Time used when the text names no usable clock time.
#[must_use]
pub fn default_time() -> NaiveTime {
    NaiveTime::from_hms_opt(12, 0, 0).unwrap_or_default()
}

/// 12-hour designator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    /// Before noon.
    Am,
    /// After noon.
    Pm,
}

/// Apply meridiem rules to an hour.
///
/// Without a meridiem the hour is taken as-is; `pm` adds twelve to hours
/// below twelve and `12am` becomes midnight.
#[must_use]
pub const fn normalize_hour(hour: u32, meridiem: Option<Meridiem>) -> u32 {
    match meridiem {
        Some(Meridiem::Pm) if hour < 12 => hour + 12,
        Some(Meridiem::Am) if hour == 12 => 0,
        _ => hour,
    }
}

/// Find the first clock time in `text`.
///
/// Returns `None` when no digits are present, or when the first match does
/// not form a valid 24-hour time (e.g. `"99"`, `"24:00"`, `"9:75"`).
#[must_use]
pub fn find_time(text: &str) -> Option<NaiveTime> {
    let caps = TIME_PATTERN.captures(text)?;
    let hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(m) => m.as_str().parse().ok()?,
        None => 0,
    };
    let meridiem = caps.get(3).map(|m| {
        if m.as_str().eq_ignore_ascii_case("pm") {
            Meridiem::Pm
        } else {
            Meridiem::Am
        }
    });

    let hour = normalize_hour(hour, meridiem);
    let time = NaiveTime::from_hms_opt(hour, minute, 0);
    if time.is_none() {
        tracing::debug!(hour, minute, "discarding out-of-range clock time");
    }
    time
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::format_clock;

    fn hhmm(text: &str) -> String {
        format_clock(find_time(text).unwrap_or_else(default_time))
    }

    #[test]
    fn test_meridiem_conversions() {
        assert_eq!(hhmm("3pm"), "15:00");
        assert_eq!(hhmm("12am"), "00:00");
        assert_eq!(hhmm("12pm"), "12:00");
        assert_eq!(hhmm("9:30am"), "09:30");
        assert_eq!(hhmm("11:45pm"), "23:45");
    }

    #[test]
    fn test_meridiem_is_case_insensitive() {
        assert_eq!(hhmm("call at 4PM"), "16:00");
        assert_eq!(hhmm("call at 7 Am"), "07:00");
    }

    #[test]
    fn test_space_before_meridiem() {
        assert_eq!(hhmm("meet at 3 pm"), "15:00");
    }

    #[test]
    fn test_bare_hour_has_no_implied_meridiem() {
        assert_eq!(hhmm("dinner at 3"), "03:00");
        assert_eq!(hhmm("standup 15"), "15:00");
    }

    #[test]
    fn test_twenty_four_hour_is_idempotent() {
        for s in ["00:00", "07:05", "12:30", "18:15", "23:59"] {
            assert_eq!(hhmm(s), s);
        }
    }

    #[test]
    fn test_first_match_wins() {
        assert_eq!(hhmm("2 people at 5pm"), "02:00");
    }

    #[test]
    fn test_default_is_noon() {
        assert_eq!(hhmm("lunch with sam"), "12:00");
        assert_eq!(hhmm(""), "12:00");
    }

    #[test]
    fn test_out_of_range_falls_back_to_default() {
        assert_eq!(find_time("room 99"), None);
        assert_eq!(hhmm("room 99"), "12:00");
        assert_eq!(hhmm("24:00"), "12:00");
        assert_eq!(hhmm("9:75"), "12:00");
    }

    #[test]
    fn test_pm_on_twenty_four_hour_clock_is_kept() {
        assert_eq!(hhmm("13pm"), "13:00");
        assert_eq!(hhmm("23pm"), "23:00");
    }

    #[test]
    fn test_non_ascii_digits_are_skipped() {
        assert_eq!(hhmm("room \u{0663} meeting 3pm"), "15:00");
        assert_eq!(find_time("\u{0669}\u{0660}"), None);
        assert_eq!(hhmm("\u{FF19}am standup 9:30am"), "09:30");
    }

    #[test]
    fn test_normalize_hour() {
        assert_eq!(normalize_hour(3, Some(Meridiem::Pm)), 15);
        assert_eq!(normalize_hour(12, Some(Meridiem::Pm)), 12);
        assert_eq!(normalize_hour(12, Some(Meridiem::Am)), 0);
        assert_eq!(normalize_hour(7, Some(Meridiem::Am)), 7);
        assert_eq!(normalize_hour(15, None), 15);
    }
}
