//! Quick add and voice command implementations.
//!
//! This module implements `chronowavel add` for natural language event
//! entry and `chronowavel voice` for dictated transcripts.

use std::io::Read;

use colored::Colorize;

use super::Context;
use crate::calendar::{CalendarManager, EventDetails};
use crate::cli::args::{OutputFormat, QuickAddArgs};
use crate::error::ChronoError;
use crate::features::nlp::parse_with_cues;
use crate::features::voice::handle_transcript;
use crate::output::{format_event_pretty, format_notification, format_parse_report, to_json};
use crate::storage::EventStore;

/// Execute the quick add command.
///
/// # Errors
///
/// Returns `ChronoError::InvalidInput` when `--strict` is set and nothing
/// besides the title was recognized, or an error if the event cannot be
/// stored.
pub fn quick_add<S: EventStore>(
    manager: &mut CalendarManager<S>,
    args: QuickAddArgs,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let text = args.joined_text();
    let report = parse_with_cues(&text, ctx.now);

    if report.is_fallback() {
        tracing::warn!(%text, "no date, time, duration or topic recognized; using defaults");
        if args.strict {
            return Err(ChronoError::InvalidInput(format!(
                "Could not recognize a date, time, duration or topic in '{text}'"
            )));
        }
    }

    // If parse-only mode, just show what would be created
    if args.parse_only {
        return format_parse_report(&report, ctx.format, &ctx.display());
    }

    let details = EventDetails {
        location: args.location,
        attendees: args.attendees,
        priority: args.priority,
        notes: args.notes,
    };
    let event = manager.add_event(report.request, details, ctx.now)?;

    match ctx.format {
        OutputFormat::Pretty => Ok(format!(
            "{} {}",
            "Created:".green().bold(),
            format_event_pretty(&event, &ctx.display())
        )),
        OutputFormat::Json => to_json(&event),
    }
}

/// Join transcript words, or read the whole of `reader` when there are none.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_transcript<R: Read>(words: &[String], mut reader: R) -> Result<String, ChronoError> {
    if !words.is_empty() {
        return Ok(words.join(" "));
    }

    let mut transcript = String::new();
    reader.read_to_string(&mut transcript)?;
    Ok(transcript.trim().to_string())
}

/// Execute the voice command.
///
/// # Errors
///
/// Returns `ChronoError::InvalidInput` if the transcript could not be
/// turned into an event; the message is the one a voice user would see.
pub fn voice<S: EventStore>(
    manager: &mut CalendarManager<S>,
    transcript: &str,
    ctx: &Context,
) -> Result<String, ChronoError> {
    let note = handle_transcript(manager, transcript, ctx.now);
    if note.is_error() && ctx.format == OutputFormat::Pretty {
        return Err(ChronoError::InvalidInput(note.message));
    }
    format_notification(&note, ctx.format)
}
