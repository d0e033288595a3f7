//! Calendar navigation state.

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::{month_start, shift_month};

/// How the calendar is displayed.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Month grid.
    #[default]
    Month,
    /// Chronological list of upcoming events.
    Agenda,
}

/// Which month is shown and which day is selected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarView {
    current: NaiveDate,
    selected: NaiveDate,
    mode: ViewMode,
}

impl CalendarView {
    /// A view showing the month of `today` with `today` selected.
    #[must_use]
    pub fn new(today: NaiveDate, mode: ViewMode) -> Self {
        Self {
            current: month_start(today),
            selected: today,
            mode,
        }
    }

    /// First day of the displayed month.
    #[must_use]
    pub const fn current_month(&self) -> NaiveDate {
        self.current
    }

    /// The selected day.
    #[must_use]
    pub const fn selected(&self) -> NaiveDate {
        self.selected
    }

    /// The display mode.
    #[must_use]
    pub const fn mode(&self) -> ViewMode {
        self.mode
    }

    /// Switch display mode.
    pub fn set_view(&mut self, mode: ViewMode) {
        self.mode = mode;
    }

    /// Select a day and show its month.
    pub fn select(&mut self, date: NaiveDate) {
        self.selected = date;
        self.current = month_start(date);
    }

    /// Jump back to today.
    pub fn go_to_today(&mut self, today: NaiveDate) {
        self.select(today);
    }

    /// Show the following month.
    pub fn next_month(&mut self) {
        self.current = shift_month(self.current, 1);
    }

    /// Show the preceding month.
    pub fn previous_month(&mut self) {
        self.current = shift_month(self.current, -1);
    }

    /// Move by `delta` months, negative for the past.
    pub fn shift(&mut self, delta: i32) {
        self.current = shift_month(self.current, delta);
    }

    /// Heading such as "October 2026".
    #[must_use]
    pub fn month_name(&self) -> String {
        self.current.format("%B %Y").to_string()
    }
}
