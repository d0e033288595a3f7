//! Calendar manager: event CRUD over an [`EventStore`].

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use uuid::Uuid;

use super::types::{CalendarDay, Event, EventDetails, EventStats, EventUpdate, ImportRecord};
use crate::core::{add_days, month_start, parse_clock};
use crate::error::ChronoError;
use crate::features::nlp::{default_time, keywords::DEFAULT_DURATION, ParsedEventRequest};
use crate::storage::EventStore;

/// Cells in a month grid: six weeks.
pub const GRID_DAYS: usize = 42;

/// Owns the in-memory event collection and writes it through to a store.
#[derive(Debug)]
pub struct CalendarManager<S: EventStore> {
    store: S,
    events: Vec<Event>,
}

impl<S: EventStore> CalendarManager<S> {
    /// Load the collection from `store`.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read.
    pub fn load(store: S) -> Result<Self, ChronoError> {
        let events = store.load()?;
        Ok(Self { store, events })
    }

    /// All events in insertion order.
    #[must_use]
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Event with the exact `id`.
    #[must_use]
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    /// Resolve a full id or a unique id prefix.
    ///
    /// # Errors
    ///
    /// Returns `ChronoError::NotFound` if nothing matches and
    /// `ChronoError::InvalidInput` if the prefix is ambiguous.
    pub fn resolve_id(&self, id_or_prefix: &str) -> Result<String, ChronoError> {
        if let Some(event) = self.event(id_or_prefix) {
            return Ok(event.id.clone());
        }

        let mut matches = self.events.iter().filter(|e| e.id.starts_with(id_or_prefix));
        match (matches.next(), matches.next()) {
            (Some(event), None) if !id_or_prefix.is_empty() => Ok(event.id.clone()),
            (Some(_), Some(_)) => Err(ChronoError::InvalidInput(format!(
                "Id prefix '{id_or_prefix}' matches more than one event"
            ))),
            _ => Err(ChronoError::NotFound(id_or_prefix.to_string())),
        }
    }

    /// Store a new event built from a parsed request.
    ///
    /// Assigns the id and creation time, then saves the whole collection.
    ///
    /// # Errors
    ///
    /// Returns `ChronoError::InvalidEvent` if the title is blank or the
    /// duration is zero, or a storage error if saving fails.
    pub fn add_event(
        &mut self,
        request: ParsedEventRequest,
        details: EventDetails,
        now: NaiveDateTime,
    ) -> Result<Event, ChronoError> {
        let event = Event {
            id: generate_id(now),
            title: request.title.trim().to_string(),
            description: request.description,
            date: request.date,
            time: request.time,
            duration: request.duration,
            color: request.color,
            category: request.category,
            reminders: request.reminders,
            location: details.location.unwrap_or_default(),
            attendees: details.attendees,
            priority: details.priority.unwrap_or_default(),
            notes: details.notes.unwrap_or_default(),
            created_at: now,
            updated_at: None,
        };
        validate(&event)?;

        self.events.push(event.clone());
        if let Err(e) = self.store.save(&self.events) {
            self.events.pop();
            return Err(e);
        }

        tracing::info!(id = %event.id, title = %event.title, date = %event.date, "added event");
        Ok(event)
    }

    /// Merge `update` into the event with `id`.
    ///
    /// # Errors
    ///
    /// Returns `ChronoError::NotFound` for an unknown id,
    /// `ChronoError::InvalidEvent` if the result fails validation, or a
    /// storage error if saving fails.
    pub fn update_event(
        &mut self,
        id: &str,
        update: EventUpdate,
        now: NaiveDateTime,
    ) -> Result<Event, ChronoError> {
        let index = self.index_of(id)?;

        let mut updated = self.events[index].clone();
        update.apply_to(&mut updated);
        updated.updated_at = Some(now);
        validate(&updated)?;

        let previous = std::mem::replace(&mut self.events[index], updated.clone());
        if let Err(e) = self.store.save(&self.events) {
            self.events[index] = previous;
            return Err(e);
        }

        tracing::info!(id, "updated event");
        Ok(updated)
    }

    /// Remove the event with `id`, returning it.
    ///
    /// # Errors
    ///
    /// Returns `ChronoError::NotFound` for an unknown id or a storage error
    /// if saving fails.
    pub fn delete_event(&mut self, id: &str) -> Result<Event, ChronoError> {
        let index = self.index_of(id)?;
        let removed = self.events.remove(index);

        if let Err(e) = self.store.save(&self.events) {
            self.events.insert(index, removed);
            return Err(e);
        }

        tracing::info!(id, "deleted event");
        Ok(removed)
    }

    /// Remove every event.
    ///
    /// # Errors
    ///
    /// Returns a storage error if the store cannot be cleared.
    pub fn clear(&mut self) -> Result<usize, ChronoError> {
        self.store.clear()?;
        let count = self.events.len();
        self.events.clear();
        tracing::info!(count, "cleared events");
        Ok(count)
    }

    /// Store every record as a new event, all or nothing.
    ///
    /// Each record gets a fresh id and creation time, as if added by hand.
    ///
    /// # Errors
    ///
    /// Returns `ChronoError::InvalidEvent` naming the first record that is
    /// invalid (nothing is stored then), or a storage error if saving
    /// fails.
    pub fn import_events(
        &mut self,
        records: Vec<ImportRecord>,
        now: NaiveDateTime,
    ) -> Result<Vec<Event>, ChronoError> {
        let mut imported = Vec::with_capacity(records.len());
        for (index, record) in records.into_iter().enumerate() {
            let event = from_record(record, now).map_err(|e| match e {
                ChronoError::InvalidEvent(msg) | ChronoError::InvalidInput(msg) => {
                    ChronoError::InvalidEvent(format!("entry {}: {msg}", index + 1))
                },
                other => other,
            })?;
            imported.push(event);
        }

        let before = self.events.len();
        self.events.extend(imported.iter().cloned());
        if let Err(e) = self.store.save(&self.events) {
            self.events.truncate(before);
            return Err(e);
        }

        tracing::info!(count = imported.len(), "imported events");
        Ok(imported)
    }

    /// The whole collection as pretty-printed JSON, in stored order.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn export_json(&self) -> Result<String, ChronoError> {
        Ok(serde_json::to_string_pretty(&self.events)?)
    }

    /// Events whose title or description contains `query`, ignoring case.
    ///
    /// An empty query matches every event. Results keep stored order.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&Event> {
        let query = query.to_lowercase();
        self.events
            .iter()
            .filter(|e| {
                e.title.to_lowercase().contains(&query)
                    || e.description.to_lowercase().contains(&query)
            })
            .collect()
    }

    /// The next `limit` events starting at or after `now`, soonest first.
    #[must_use]
    pub fn upcoming(&self, now: NaiveDateTime, limit: usize) -> Vec<&Event> {
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.starts_at() >= now)
            .collect();
        events.sort_by_key(|e| e.starts_at());
        events.truncate(limit);
        events
    }

    /// Events on `date`, ordered by start time.
    #[must_use]
    pub fn events_on(&self, date: NaiveDate) -> Vec<&Event> {
        let mut events: Vec<&Event> = self.events.iter().filter(|e| e.is_on(date)).collect();
        events.sort_by_key(|e| e.time);
        events
    }

    /// Events in `[from, from + days)`, ordered by start.
    ///
    /// A window reaching past the last representable date has no upper
    /// bound.
    #[must_use]
    pub fn agenda(&self, from: NaiveDate, days: u32) -> Vec<&Event> {
        let until = add_days(from, i64::from(days));
        let mut events: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.date >= from && !until.is_some_and(|until| e.date >= until))
            .collect();
        events.sort_by_key(|e| e.starts_at());
        events
    }

    /// Six-week grid for the month containing `month`.
    ///
    /// The grid starts on the `first_day_of_week` (0 = Sunday) on or
    /// before the first of the month.
    #[must_use]
    pub fn month_grid(
        &self,
        month: NaiveDate,
        today: NaiveDate,
        first_day_of_week: u8,
    ) -> Vec<CalendarDay> {
        let first = month_start(month);
        let lead = (i64::from(first.weekday().num_days_from_sunday())
            - i64::from(first_day_of_week % 7)
            + 7)
            % 7;
        let start = add_days(first, -lead).unwrap_or(first);

        std::iter::successors(Some(start), NaiveDate::succ_opt)
            .take(GRID_DAYS)
            .map(|date| {
                CalendarDay {
                    date,
                    is_current_month: date.month() == first.month() && date.year() == first.year(),
                    is_today: date == today,
                    is_weekend: matches!(date.weekday(), Weekday::Sat | Weekday::Sun),
                    events: self.events_on(date).into_iter().cloned().collect(),
                }
            })
            .collect()
    }

    /// Counts of all, upcoming and this-week events relative to `now`.
    #[must_use]
    pub fn stats(&self, now: NaiveDateTime) -> EventStats {
        let week = Duration::days(7);
        EventStats {
            total: self.events.len(),
            upcoming: self.events.iter().filter(|e| e.starts_at() >= now).count(),
            this_week: self
                .events
                .iter()
                .filter(|e| {
                    let diff = e.starts_at() - now;
                    diff >= Duration::zero() && diff <= week
                })
                .count(),
        }
    }

    fn index_of(&self, id: &str) -> Result<usize, ChronoError> {
        self.events
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| ChronoError::NotFound(id.to_string()))
    }
}

/// `evt_<millis>_<9 hex chars>`
fn generate_id(now: NaiveDateTime) -> String {
    let suffix = Uuid::new_v4().simple().to_string();
    format!("evt_{}_{}", now.and_utc().timestamp_millis(), &suffix[..9])
}

fn from_record(record: ImportRecord, now: NaiveDateTime) -> Result<Event, ChronoError> {
    let time = match record.time.as_deref() {
        Some(time) => parse_clock(time)?,
        None => default_time(),
    };
    let event = Event {
        id: generate_id(now),
        title: record.title.trim().to_string(),
        description: record.description,
        date: record.date,
        time,
        duration: record.duration.filter(|d| *d > 0).unwrap_or(DEFAULT_DURATION),
        color: record.color,
        category: record.category,
        reminders: record.reminders,
        location: record.location,
        attendees: record.attendees,
        priority: record.priority,
        notes: record.notes,
        created_at: now,
        updated_at: None,
    };
    validate(&event)?;
    Ok(event)
}

fn validate(event: &Event) -> Result<(), ChronoError> {
    if event.title.trim().is_empty() {
        return Err(ChronoError::InvalidEvent("title is empty".to_string()));
    }
    if event.duration == 0 {
        return Err(ChronoError::InvalidEvent(
            "duration must be positive".to_string(),
        ));
    }
    Ok(())
}

/// A manager over a mock store that accepts every write.
#[cfg(test)]
pub(crate) fn test_manager() -> CalendarManager<crate::storage::MockEventStore> {
    let mut store = crate::storage::MockEventStore::new();
    store.expect_load().returning(|| Ok(Vec::new()));
    store.expect_save().returning(|_| Ok(()));
    store.expect_clear().returning(|| Ok(()));
    CalendarManager {
        store,
        events: Vec::new(),
    }
}
