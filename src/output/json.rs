//! JSON output formatting for chronowavel.
//!
//! This module provides functions for formatting calendar data as JSON.

use serde::Serialize;
use serde_json::json;

use crate::calendar::{CalendarDay, Event};
use crate::error::ChronoError;
use crate::features::nlp::ParseReport;

/// Format events as JSON
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn format_events_json(events: &[&Event], list_name: &str) -> Result<String, ChronoError> {
    let output = json!({
        "list": list_name,
        "count": events.len(),
        "items": events
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a month grid as JSON
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn format_month_json(heading: &str, days: &[CalendarDay]) -> Result<String, ChronoError> {
    let output = json!({
        "month": heading,
        "days": days
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format a parse report as JSON
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn format_parse_report_json(report: &ParseReport) -> Result<String, ChronoError> {
    let output = json!({
        "parsed": report.request,
        "recognized": {
            "titleKeyword": report.cues.title_keyword,
            "date": report.cues.has_date(),
            "time": report.cues.time,
            "duration": report.cues.duration,
            "color": report.cues.color,
            "category": report.cues.category,
        },
        "fallback": report.is_fallback()
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Generic JSON formatter for any serializable type
///
/// # Errors
///
/// Returns `ChronoError::Parse` if JSON serialization fails.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, ChronoError> {
    Ok(serde_json::to_string_pretty(value)?)
}
