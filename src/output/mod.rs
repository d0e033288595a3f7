//! Output formatting for chronowavel.
//!
//! This module provides formatters for displaying calendar data in various formats.

mod json;
mod pretty;

use crate::calendar::{CalendarDay, Event, EventStats};
use crate::cli::args::OutputFormat;
use crate::config::{CalendarConfig, DateFormat, TimeFormat};
use crate::error::ChronoError;
use crate::features::nlp::ParseReport;
use crate::features::notify::Notification;

pub use json::*;
pub use pretty::*;

/// Display preferences for pretty output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DisplayOptions {
    /// Clock style.
    pub time_format: TimeFormat,
    /// Date style.
    pub date_format: DateFormat,
    /// First weekday column of the month grid (0 = Sunday).
    pub first_day_of_week: u8,
}

impl From<&CalendarConfig> for DisplayOptions {
    fn from(config: &CalendarConfig) -> Self {
        Self {
            time_format: config.time_format,
            date_format: config.date_format,
            first_day_of_week: config.first_day_of_week,
        }
    }
}

/// Format a list of events based on output format
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn format_events(
    events: &[&Event],
    title: &str,
    format: OutputFormat,
    display: &DisplayOptions,
) -> Result<String, ChronoError> {
    match format {
        OutputFormat::Pretty => Ok(format_events_pretty(events, title, display)),
        OutputFormat::Json => format_events_json(events, title),
    }
}

/// Format a single event based on output format
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn format_event(
    event: &Event,
    format: OutputFormat,
    display: &DisplayOptions,
) -> Result<String, ChronoError> {
    match format {
        OutputFormat::Pretty => Ok(format_event_pretty(event, display)),
        OutputFormat::Json => to_json(event),
    }
}

/// Format a month grid based on output format
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn format_month(
    heading: &str,
    days: &[CalendarDay],
    format: OutputFormat,
    display: &DisplayOptions,
) -> Result<String, ChronoError> {
    match format {
        OutputFormat::Pretty => Ok(format_month_pretty(heading, days, display)),
        OutputFormat::Json => format_month_json(heading, days),
    }
}

/// Format event statistics based on output format
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn format_stats(stats: &EventStats, format: OutputFormat) -> Result<String, ChronoError> {
    match format {
        OutputFormat::Pretty => Ok(format_stats_pretty(stats)),
        OutputFormat::Json => to_json(stats),
    }
}

/// Format a parse result (without storing it) based on output format
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn format_parse_report(
    report: &ParseReport,
    format: OutputFormat,
    display: &DisplayOptions,
) -> Result<String, ChronoError> {
    match format {
        OutputFormat::Pretty => Ok(format_parse_report_pretty(report, display)),
        OutputFormat::Json => format_parse_report_json(report),
    }
}

/// Format a notification based on output format
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn format_notification(
    notification: &Notification,
    format: OutputFormat,
) -> Result<String, ChronoError> {
    match format {
        OutputFormat::Pretty => Ok(format_notification_pretty(notification)),
        OutputFormat::Json => to_json(notification),
    }
}
