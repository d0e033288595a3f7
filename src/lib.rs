//! chronowavel - a natural-language calendar for the terminal
//!
//! This crate turns free-text descriptions such as "Team meeting tomorrow
//! at 3pm" into calendar events and stores them as a JSON document.

#![deny(unsafe_code)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used))]

pub mod calendar;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod features;
pub mod output;
pub mod storage;

pub use calendar::{CalendarManager, Event};
pub use cli::args::{Cli, Commands, OutputFormat};
pub use error::ChronoError;
pub use features::nlp::{parse_natural_language, ParsedEventRequest};
pub use storage::{EventStore, JsonFileStore};
