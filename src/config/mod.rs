//! Configuration management for chronowavel.
//!
//! This module handles loading and saving configuration from `~/.chronowavel/`.

mod paths;
mod settings;

pub use paths::Paths;
pub use settings::{
    CalendarConfig, ColorSetting, Config, DateFormat, GeneralConfig, TimeFormat, MAX_AGENDA_DAYS,
};
