//! Natural language event parser.
//!
//! Parses strings like "Team meeting tomorrow at 3pm" into an event
//! creation request. Parsing is total: every input yields a fully
//! populated record, falling back to defaults for anything unrecognized.

use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use super::classify::{find_category, find_color, find_duration};
use super::date::{find_date_cue, resolve_cue};
use super::keywords::{
    DateCue, DEFAULT_CATEGORY, DEFAULT_COLOR, DEFAULT_DURATION, DEFAULT_REMINDERS, DEFAULT_TITLE,
    TITLE_STOP_WORDS,
};
use super::time::{default_time, find_time};
use crate::core::datetime::hhmm;
use crate::core::{midnight, Category, EventColor};

/// Structured request to create an event, as produced by the parser.
///
/// Field names match what the event store expects.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedEventRequest {
    /// Display title; never empty.
    pub title: String,
    /// Always empty from the parser.
    pub description: String,
    /// Day of the event.
    pub date: NaiveDate,
    /// Start time, serialized as `HH:MM`.
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Length in minutes.
    pub duration: u32,
    /// Display color.
    pub color: EventColor,
    /// Event category.
    pub category: Category,
    /// Reminder offsets in minutes before start.
    pub reminders: Vec<u32>,
}

impl ParsedEventRequest {
    /// The date as a local-midnight datetime.
    #[must_use]
    pub fn date_time(&self) -> NaiveDateTime {
        midnight(self.date)
    }

    /// Start instant (date plus time).
    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Which parts of the input were actually recognized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct ParseCues {
    /// Stop word that ended the title, if one occurred.
    pub title_keyword: Option<&'static str>,
    /// Date cue found in the text.
    #[serde(skip)]
    pub date: Option<DateCue>,
    /// A valid clock time was found.
    pub time: bool,
    /// A duration phrase was found.
    pub duration: bool,
    /// A color keyword was found.
    pub color: bool,
    /// A category keyword was found.
    pub category: bool,
}

impl ParseCues {
    /// Whether a date cue was found.
    #[must_use]
    pub const fn has_date(&self) -> bool {
        self.date.is_some()
    }

    /// Number of resolvers that matched something.
    #[must_use]
    pub fn matched(&self) -> usize {
        [
            self.date.is_some(),
            self.time,
            self.duration,
            self.color,
            self.category,
        ]
        .into_iter()
        .filter(|m| *m)
        .count()
    }
}

/// A parse result together with what was recognized.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseReport {
    /// The request, always fully populated.
    pub request: ParsedEventRequest,
    /// Recognition signals.
    pub cues: ParseCues,
}

impl ParseReport {
    /// True when date, time, duration, color and category all came from defaults.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.cues.matched() == 0
    }
}

/// Parse free text into an event request relative to `now`.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use chronowavel::core::Category;
/// use chronowavel::features::nlp::parse_natural_language;
///
/// let now = NaiveDate::from_ymd_opt(2026, 10, 18)
///     .unwrap()
///     .and_hms_opt(9, 0, 0)
///     .unwrap();
/// let event = parse_natural_language("Team meeting tomorrow at 3pm", now);
/// assert_eq!(event.title, "Team meeting tomorrow");
/// assert_eq!(event.date, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap());
/// assert_eq!(event.time.format("%H:%M").to_string(), "15:00");
/// assert_eq!(event.category, Category::Work);
/// ```
#[must_use]
pub fn parse_natural_language(input: &str, now: NaiveDateTime) -> ParsedEventRequest {
    parse_with_cues(input, now).request
}

/// Parse against the local wall clock.
#[must_use]
pub fn parse_natural_language_now(input: &str) -> ParsedEventRequest {
    parse_natural_language(input, Local::now().naive_local())
}

/// Parse free text and report which resolvers matched.
#[must_use]
pub fn parse_with_cues(input: &str, now: NaiveDateTime) -> ParseReport {
    let text = input.trim().to_lowercase();
    let today = now.date();

    let (title, title_keyword) = extract_title(&text);
    let date_cue = find_date_cue(&text);
    let time = find_time(&text);
    let duration = find_duration(&text);
    let color = find_color(&text);
    let category = find_category(&text);

    let cues = ParseCues {
        title_keyword,
        date: date_cue,
        time: time.is_some(),
        duration: duration.is_some(),
        color: color.is_some(),
        category: category.is_some(),
    };

    let title = capitalize_first(title);
    let request = ParsedEventRequest {
        title: if title.is_empty() {
            DEFAULT_TITLE.to_string()
        } else {
            title
        },
        description: String::new(),
        date: date_cue.map_or(today, |cue| resolve_cue(cue, today)),
        time: time.unwrap_or_else(default_time),
        duration: duration.unwrap_or(DEFAULT_DURATION),
        color: color.unwrap_or(DEFAULT_COLOR),
        category: category.unwrap_or(DEFAULT_CATEGORY),
        reminders: DEFAULT_REMINDERS.to_vec(),
    };

    tracing::debug!(
        input,
        title = %request.title,
        date = %request.date,
        time = %request.time,
        matched = cues.matched(),
        "parsed event request"
    );

    ParseReport { request, cues }
}

/// Split off the title from lowercased, trimmed `text`.
///
/// The stop words are tried in table order and the first one occurring
/// anywhere in the text cuts the title at its first occurrence. Matches
/// are plain substrings, so "on" also fires inside "session".
fn extract_title(text: &str) -> (&str, Option<&'static str>) {
    TITLE_STOP_WORDS
        .iter()
        .find_map(|&keyword| text.find(keyword).map(|i| (text[..i].trim(), Some(keyword))))
        .unwrap_or((text, None))
}

/// Uppercase the first character, leaving the rest untouched.
fn capitalize_first(text: &str) -> String {
    let mut chars = text.chars();
    chars
        .next()
        .map(|first| first.to_uppercase().chain(chars).collect())
        .unwrap_or_default()
}
