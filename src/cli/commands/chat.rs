//! Interactive chat command.

use std::io::{BufRead, Write};

use chrono::Local;
use colored::Colorize;

use super::Context;
use crate::calendar::CalendarManager;
use crate::cli::args::OutputFormat;
use crate::error::ChronoError;
use crate::features::chat::{ChatMessage, ChatSession, Sender};
use crate::storage::EventStore;

const PROMPT: &str = "you> ";

fn render(message: &ChatMessage) -> String {
    match message.sender {
        Sender::Bot => format!("{} {}", "bot>".cyan().bold(), message.text),
        Sender::User => format!("{} {}", "you>".dimmed(), message.text),
    }
}

/// Run the assistant as a line-oriented conversation until `exit`, `quit`
/// or end of input.
///
/// Each reply uses the wall clock at the time the line was read unless the
/// context pins a reference time. With JSON output the transcript is
/// printed as one document once the conversation ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn chat<S: EventStore, R: BufRead, W: Write>(
    manager: &mut CalendarManager<S>,
    input: R,
    mut out: W,
    ctx: &Context,
    live_clock: bool,
) -> Result<String, ChronoError> {
    let clock = || {
        if live_clock {
            Local::now().naive_local()
        } else {
            ctx.now
        }
    };

    let mut session = ChatSession::new(clock(), ctx.config.calendar.date_format);
    session.toggle();
    let pretty = ctx.format == OutputFormat::Pretty;

    if pretty {
        writeln!(out, "{}", render(&session.messages()[0]))?;
        write!(out, "{PROMPT}")?;
        out.flush()?;
    }

    for line in input.lines() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.eq_ignore_ascii_case("exit") || trimmed.eq_ignore_ascii_case("quit") {
            break;
        }

        if let Some(reply) = session.send(manager, trimmed, clock()) {
            if pretty {
                writeln!(out, "{}\n", render(reply))?;
            }
        }

        if pretty {
            write!(out, "{PROMPT}")?;
            out.flush()?;
        }
    }

    session.toggle();
    tracing::debug!(messages = session.messages().len(), "chat session ended");

    if pretty {
        writeln!(out)?;
        Ok(String::new())
    } else {
        crate::output::to_json(session.messages())
    }
}
