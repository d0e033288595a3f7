//! Calendar data types.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::core::datetime::hhmm;
use crate::core::{Category, EventColor};
use crate::error::ChronoError;

/// Event importance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Low priority.
    Low,
    /// Medium priority.
    #[default]
    Medium,
    /// High priority.
    High,
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

impl std::str::FromStr for Priority {
    type Err = ChronoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" | "med" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            other => Err(ChronoError::InvalidInput(format!("Unknown priority '{other}'"))),
        }
    }
}

/// A stored calendar event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    /// Unique identifier (`evt_<millis>_<suffix>`).
    pub id: String,
    /// Display title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Day of the event.
    pub date: NaiveDate,
    /// Start time.
    #[serde(with = "hhmm")]
    pub time: NaiveTime,
    /// Length in minutes.
    pub duration: u32,
    /// Display color.
    #[serde(default)]
    pub color: EventColor,
    /// Category tag.
    #[serde(default)]
    pub category: Category,
    /// Reminder offsets in minutes before start.
    #[serde(default)]
    pub reminders: Vec<u32>,
    /// Where the event happens.
    #[serde(default)]
    pub location: String,
    /// Invited people.
    #[serde(default)]
    pub attendees: Vec<String>,
    /// Importance.
    #[serde(default)]
    pub priority: Priority,
    /// Private notes.
    #[serde(default)]
    pub notes: String,
    /// When the event was stored.
    pub created_at: NaiveDateTime,
    /// Last modification, if any.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Event {
    /// Start instant.
    #[must_use]
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }

    /// End instant, capped at the last representable instant.
    #[must_use]
    pub fn ends_at(&self) -> NaiveDateTime {
        self.starts_at()
            .checked_add_signed(chrono::Duration::minutes(i64::from(self.duration)))
            .unwrap_or(NaiveDateTime::MAX)
    }

    /// Whether the event falls on `date`.
    #[must_use]
    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }
}

/// One entry of an imported event file.
///
/// Accepts the exported shape. `id`, `createdAt` and `updatedAt` are
/// ignored because every imported entry is stored as a new event; other
/// missing fields take the same defaults as a new event.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportRecord {
    /// Display title.
    pub title: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Day of the event.
    pub date: NaiveDate,
    /// Start time as `HH:MM`; noon when absent.
    #[serde(default)]
    pub time: Option<String>,
    /// Length in minutes; one hour when absent or zero.
    #[serde(default)]
    pub duration: Option<u32>,
    /// Display color.
    #[serde(default)]
    pub color: EventColor,
    /// Category tag.
    #[serde(default)]
    pub category: Category,
    /// Reminder offsets in minutes before start.
    #[serde(default)]
    pub reminders: Vec<u32>,
    /// Where the event happens.
    #[serde(default)]
    pub location: String,
    /// Invited people.
    #[serde(default)]
    pub attendees: Vec<String>,
    /// Importance.
    #[serde(default)]
    pub priority: Priority,
    /// Private notes.
    #[serde(default)]
    pub notes: String,
}

/// Optional details not produced by the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventDetails {
    /// Location.
    pub location: Option<String>,
    /// Attendees.
    pub attendees: Vec<String>,
    /// Priority; medium when unset.
    pub priority: Option<Priority>,
    /// Notes.
    pub notes: Option<String>,
}

/// Partial update of an event. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventUpdate {
    /// New title.
    pub title: Option<String>,
    /// New description.
    pub description: Option<String>,
    /// New date.
    pub date: Option<NaiveDate>,
    /// New start time.
    pub time: Option<NaiveTime>,
    /// New duration in minutes.
    pub duration: Option<u32>,
    /// New color.
    pub color: Option<EventColor>,
    /// New category.
    pub category: Option<Category>,
    /// New reminders.
    pub reminders: Option<Vec<u32>>,
    /// New location.
    pub location: Option<String>,
    /// New attendee list.
    pub attendees: Option<Vec<String>>,
    /// New priority.
    pub priority: Option<Priority>,
    /// New notes.
    pub notes: Option<String>,
}

impl EventUpdate {
    /// True if no field is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Apply the set fields to `event`.
    pub fn apply_to(self, event: &mut Event) {
        if let Some(v) = self.title {
            event.title = v;
        }
        if let Some(v) = self.description {
            event.description = v;
        }
        if let Some(v) = self.date {
            event.date = v;
        }
        if let Some(v) = self.time {
            event.time = v;
        }
        if let Some(v) = self.duration {
            event.duration = v;
        }
        if let Some(v) = self.color {
            event.color = v;
        }
        if let Some(v) = self.category {
            event.category = v;
        }
        if let Some(v) = self.reminders {
            event.reminders = v;
        }
        if let Some(v) = self.location {
            event.location = v;
        }
        if let Some(v) = self.attendees {
            event.attendees = v;
        }
        if let Some(v) = self.priority {
            event.priority = v;
        }
        if let Some(v) = self.notes {
            event.notes = v;
        }
    }
}

/// One cell of the month grid.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarDay {
    /// The day.
    pub date: NaiveDate,
    /// Belongs to the displayed month.
    pub is_current_month: bool,
    /// Is the reference today.
    pub is_today: bool,
    /// Saturday or Sunday.
    pub is_weekend: bool,
    /// Events on this day, ordered by time.
    pub events: Vec<Event>,
}

/// Summary counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventStats {
    /// All stored events.
    pub total: usize,
    /// Events starting at or after now.
    pub upcoming: usize,
    /// Events starting within the next seven days.
    pub this_week: usize,
}
