use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use serde::{Deserialize, Serialize};

use crate::calendar::{Priority, ViewMode};
use crate::config::MAX_AGENDA_DAYS;
use crate::core::{Category, EventColor};

#[derive(Parser)]
#[command(name = "chronowavel")]
#[command(about = "A terminal calendar that understands plain-English event descriptions")]
#[command(long_about = "chronowavel - a natural-language calendar for the terminal

Type an event the way you would say it and chronowavel works out the title,
date, time, duration, category and color.

QUICK START:
  chronowavel add \"Team meeting tomorrow at 3pm\"   Create an event
  chronowavel today                                 Show today's events
  chronowavel month                                 Show the month grid
  chronowavel chat                                  Talk to the assistant

OUTPUT FORMATS:
  --output pretty    Human-readable colored output (default)
  --output json      Machine-readable JSON for scripting

For more information on a specific command, run:
  chronowavel <command> --help")]
#[command(version, propagate_version = true)]
pub struct Cli {
    /// Output format for command results
    ///
    /// Use 'pretty' for human-readable colored output,
    /// or 'json' for machine-readable output suitable for scripting.
    /// Defaults to the `general.default_output` config setting.
    #[arg(short, long, value_enum, global = true)]
    pub output: Option<OutputFormat>,

    /// Directory holding config.yaml and events.json
    #[arg(long, env = "CHRONOWAVEL_HOME", global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Log parser and storage activity to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format for command results.
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable colored output.
    #[default]
    Pretty,
    /// Machine-readable JSON output.
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create an event from a natural-language description
    ///
    /// The text is scanned for a title, a date word, a clock time, a
    /// duration phrase and topic keywords. Anything not recognized falls
    /// back to a default.
    ///
    /// # Examples
    ///
    ///   chronowavel add Team meeting tomorrow at 3pm
    ///   chronowavel add "Gym session Friday 6am"
    ///   chronowavel add "Doctor appointment next week 10am" --notes "bring forms"
    ///   chronowavel add "Lunch today at 12:30pm" --parse-only
    ///
    /// # Recognized Patterns
    ///
    ///   Dates:      today, tomorrow, monday..sunday, next week
    ///   Times:      3pm, 10am, 14:30, 9:15am
    ///   Durations:  30 min, 45 min, 1 hour, 2 hours, 3 hours
    ///   Topics:     meeting, lunch, gym, doctor, party, ...
    #[command(alias = "a")]
    Add(QuickAddArgs),

    /// Create an event from a speech-to-text transcript
    ///
    /// Reads the transcript from the arguments, or from stdin when none
    /// are given, so any dictation tool can pipe into it.
    ///
    /// # Examples
    ///
    ///   chronowavel voice "dentist tomorrow at 9am"
    ///   whisper-cli --stdout | chronowavel voice
    Voice {
        /// Transcript text; read from stdin when omitted
        transcript: Vec<String>,
    },

    /// Chat with the scheduling assistant
    ///
    /// Greets, lists today's schedule, or turns a message into an event.
    /// Type 'exit' or 'quit' to leave.
    Chat,

    /// List every event
    #[command(alias = "ls")]
    List,

    /// List events scheduled for today
    #[command(alias = "t")]
    Today,

    /// List events for the coming days
    ///
    /// # Examples
    ///
    ///   chronowavel agenda             Next `calendar.agenda_days` days
    ///   chronowavel agenda --days 14   Next two weeks
    Agenda {
        /// Number of days to include, starting today (1-3660)
        #[arg(
            short,
            long,
            value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_AGENDA_DAYS))
        )]
        days: Option<u32>,
    },

    /// List the next few events
    Upcoming {
        /// Maximum number of events to show
        #[arg(short = 'n', long, default_value_t = 5)]
        limit: usize,
    },

    /// Find events whose title or description contains the query
    ///
    /// Matching ignores case.
    ///
    /// # Examples
    ///
    ///   chronowavel search dentist
    ///   chronowavel search team sync
    #[command(alias = "s")]
    Search {
        /// Text to look for
        #[arg(required = true, num_args = 1..)]
        query: Vec<String>,
    },

    /// Write every event as JSON
    ///
    /// # Examples
    ///
    ///   chronowavel export                   Print to stdout
    ///   chronowavel export backup.json       Write to a file
    Export {
        /// File to write; stdout when omitted
        file: Option<PathBuf>,
    },

    /// Add every event from a JSON file written by `export`
    ///
    /// Each entry is stored as a new event with a fresh id. Nothing is
    /// stored if any entry is invalid.
    Import {
        /// JSON file holding an array of events
        file: PathBuf,
    },

    /// Show a month grid
    ///
    /// # Examples
    ///
    ///   chronowavel month              This month
    ///   chronowavel month 2026-12      December 2026
    ///   chronowavel month --offset -1  Last month
    #[command(alias = "m")]
    Month {
        /// Month to show (YYYY-MM); defaults to the current month
        month: Option<String>,

        /// Months to move forward (or backward when negative)
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },

    /// Show the calendar in the configured default view
    ///
    /// Uses `calendar.default_view` from the config unless `--mode` is given.
    #[command(alias = "v")]
    View {
        /// View to show instead of the configured default
        #[arg(long, value_enum)]
        mode: Option<ViewMode>,
    },

    /// Show a single event
    Show {
        /// Event id or a unique id prefix
        id: String,
    },

    /// Change fields of an event
    Edit(EditArgs),

    /// Delete an event
    #[command(alias = "rm")]
    Delete {
        /// Event id or a unique id prefix
        id: String,
    },

    /// Show event counts
    Stats,

    /// Delete every event
    Clear {
        /// Confirm deletion of every event
        #[arg(long)]
        yes: bool,
    },

    /// Show the effective configuration
    ///
    /// # Examples
    ///
    ///   chronowavel config          Print the settings in use
    ///   chronowavel config --init   Write a default config.yaml
    Config {
        /// Write the default configuration file if none exists
        #[arg(long)]
        init: bool,
    },

    /// Generate shell completions
    ///
    /// # Examples
    ///
    ///   chronowavel completions zsh > ~/.zsh/completions/_chronowavel
    ///   source <(chronowavel completions bash)
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Arguments for `chronowavel add`.
#[derive(Args)]
pub struct QuickAddArgs {
    /// The event description in natural language
    #[arg(required = true, num_args = 1..)]
    pub text: Vec<String>,

    /// Only parse and show what would be created, don't store it
    #[arg(long)]
    pub parse_only: bool,

    /// Refuse text where nothing besides the title was recognized
    #[arg(long)]
    pub strict: bool,

    /// Where the event takes place
    #[arg(long)]
    pub location: Option<String>,

    /// Free-form notes
    #[arg(long)]
    pub notes: Option<String>,

    /// Priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Attendee; repeat for several
    #[arg(long = "attendee", value_name = "NAME")]
    pub attendees: Vec<String>,
}

impl QuickAddArgs {
    /// The description words joined into one string.
    #[must_use]
    pub fn joined_text(&self) -> String {
        self.text.join(" ")
    }
}

/// Arguments for `chronowavel edit`.
#[derive(Args)]
pub struct EditArgs {
    /// Event id or a unique id prefix
    pub id: String,

    /// New title
    #[arg(long)]
    pub title: Option<String>,

    /// New description
    #[arg(long)]
    pub description: Option<String>,

    /// New date (YYYY-MM-DD)
    #[arg(long)]
    pub date: Option<String>,

    /// New start time (HH:MM, 24-hour)
    #[arg(long)]
    pub time: Option<String>,

    /// New duration in minutes
    #[arg(long)]
    pub duration: Option<u32>,

    /// New color (name or #RRGGBB)
    #[arg(long)]
    pub color: Option<EventColor>,

    /// New category
    #[arg(long)]
    pub category: Option<Category>,

    /// New location
    #[arg(long)]
    pub location: Option<String>,

    /// New notes
    #[arg(long)]
    pub notes: Option<String>,

    /// New priority (low, medium, high)
    #[arg(long)]
    pub priority: Option<Priority>,

    /// Replace the attendee list; repeat for several
    #[arg(long = "attendee", value_name = "NAME")]
    pub attendees: Option<Vec<String>>,

    /// Replace the reminders (minutes before start); repeat for several
    #[arg(long = "reminder", value_name = "MINUTES")]
    pub reminders: Option<Vec<u32>>,
}
