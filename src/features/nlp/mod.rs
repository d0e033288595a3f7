//! Natural language parsing for event entry.
//!
//! This module turns free text like:
//! - "Team meeting tomorrow at 3pm"
//! - "Gym session Friday 6am"
//! - "Doctor checkup next week 30 min"
//!
//! into a [`ParsedEventRequest`]. Each resolver is a fixed-priority rule
//! table with an explicit default, so parsing never fails.

mod classify;
mod date;
pub mod keywords;
mod parser;
mod time;

pub use classify::{find_category, find_color, find_duration};
pub use date::{find_date_cue, resolve_cue};
pub use keywords::DateCue;
pub use parser::{
    parse_natural_language, parse_natural_language_now, parse_with_cues, ParseCues, ParseReport,
    ParsedEventRequest,
};
pub use time::{default_time, find_time, Meridiem};
