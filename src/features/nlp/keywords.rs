//! Ordered keyword tables.
//!
//! Every fixed-priority decision in the parser is a slice of rules checked
//! top to bottom; the first rule with any keyword contained in the text wins.

use chrono::Weekday;

use crate::core::{Category, EventColor};

/// A set of trigger substrings mapped to a value.
#[derive(Debug, Clone, Copy)]
pub struct KeywordRule<T: 'static> {
    /// Substrings that trigger this rule.
    pub keywords: &'static [&'static str],
    /// Value produced when the rule fires.
    pub value: T,
}

impl<T: Copy> KeywordRule<T> {
    /// Whether any keyword is contained in `text`.
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        self.keywords.iter().any(|k| text.contains(k))
    }
}

/// First rule matching `text`, if any.
#[must_use]
pub fn first_match<T: Copy>(rules: &[KeywordRule<T>], text: &str) -> Option<T> {
    rules.iter().find(|r| r.matches(text)).map(|r| r.value)
}

/// Words that end the title. Checked in this order, not by position in text.
pub const TITLE_STOP_WORDS: &[&str] = &["at", "tomorrow", "today", "next", "on", "this"];

/// Title used when nothing is left after extraction.
pub const DEFAULT_TITLE: &str = "New Event";

/// Relative date cues, before weekday names are considered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DateCue {
    /// "today"
    Today,
    /// "tomorrow"
    Tomorrow,
    /// A weekday name; resolves to its next occurrence after today.
    Weekday(Weekday),
    /// "next week"
    NextWeek,
}

/// Date cues in resolution order.
pub const DATE_RULES: &[KeywordRule<DateCue>] = &[
    KeywordRule { keywords: &["today"], value: DateCue::Today },
    KeywordRule { keywords: &["tomorrow"], value: DateCue::Tomorrow },
    KeywordRule { keywords: &["sunday"], value: DateCue::Weekday(Weekday::Sun) },
    KeywordRule { keywords: &["monday"], value: DateCue::Weekday(Weekday::Mon) },
    KeywordRule { keywords: &["tuesday"], value: DateCue::Weekday(Weekday::Tue) },
    KeywordRule { keywords: &["wednesday"], value: DateCue::Weekday(Weekday::Wed) },
    KeywordRule { keywords: &["thursday"], value: DateCue::Weekday(Weekday::Thu) },
    KeywordRule { keywords: &["friday"], value: DateCue::Weekday(Weekday::Fri) },
    KeywordRule { keywords: &["saturday"], value: DateCue::Weekday(Weekday::Sat) },
    KeywordRule { keywords: &["next week"], value: DateCue::NextWeek },
];

/// Duration phrases in minutes. Closed set; other phrasings fall to the default.
pub const DURATION_RULES: &[KeywordRule<u32>] = &[
    KeywordRule { keywords: &["30min", "30 min"], value: 30 },
    KeywordRule { keywords: &["45min", "45 min"], value: 45 },
    KeywordRule { keywords: &["1 hour", "1hr"], value: 60 },
    KeywordRule { keywords: &["2 hour", "2hr"], value: 120 },
    KeywordRule { keywords: &["3 hour", "3hr"], value: 180 },
];

/// Minutes used when no duration phrase is present.
pub const DEFAULT_DURATION: u32 = 60;

/// Color rules. The health row differs from the category table on purpose.
pub const COLOR_RULES: &[KeywordRule<EventColor>] = &[
    KeywordRule { keywords: &["work", "meeting", "office"], value: EventColor::Blue },
    KeywordRule { keywords: &["personal", "family"], value: EventColor::Green },
    KeywordRule { keywords: &["gym", "workout", "exercise"], value: EventColor::Red },
    KeywordRule { keywords: &["doctor", "hospital", "health"], value: EventColor::Orange },
];

/// Color used when no color rule fires.
pub const DEFAULT_COLOR: EventColor = EventColor::Purple;

/// Category rules.
pub const CATEGORY_RULES: &[KeywordRule<Category>] = &[
    KeywordRule { keywords: &["work", "meeting", "office"], value: Category::Work },
    KeywordRule { keywords: &["personal", "family"], value: Category::Personal },
    KeywordRule { keywords: &["gym", "workout"], value: Category::Health },
];

/// Category used when no category rule fires.
pub const DEFAULT_CATEGORY: Category = Category::General;

/// Reminder offsets (minutes before start) attached to every parsed event.
pub const DEFAULT_REMINDERS: &[u32] = &[15];
