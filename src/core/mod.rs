//! Core abstractions for chronowavel.
//!
//! Shared date helpers and the fixed category/color taxonomy used by the
//! parser, the calendar and the output formatters.

mod category;
pub mod datetime;

pub use category::{Category, EventColor};
pub use datetime::{
    add_days, days_until_next, format_clock, midnight, month_start, parse_clock,
    parse_iso_date, parse_year_month, shift_month,
};
