//! Configuration settings for chronowavel.
//!
//! Settings are loaded from `~/.chronowavel/config.yaml`.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::calendar::ViewMode;
use crate::cli::args::OutputFormat;
use crate::config::Paths;
use crate::error::ChronoError;

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// General settings.
    pub general: GeneralConfig,
    /// Calendar display settings.
    pub calendar: CalendarConfig,
}

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneralConfig {
    /// Default output format.
    #[serde(default = "default_output_format")]
    pub default_output: OutputFormat,
    /// Color output setting.
    #[serde(default = "default_color")]
    pub color: ColorSetting,
}

/// Color output setting.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ColorSetting {
    /// Auto-detect based on terminal.
    #[default]
    Auto,
    /// Always use colors.
    Always,
    /// Never use colors.
    Never,
}

/// Clock style for displayed times.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// `3:00 PM`
    #[default]
    #[serde(rename = "12")]
    Twelve,
    /// `15:00`
    #[serde(rename = "24")]
    TwentyFour,
}

impl TimeFormat {
    /// Render a time in this style.
    #[must_use]
    pub fn render(self, time: NaiveTime) -> String {
        match self {
            Self::Twelve => time.format("%-I:%M %p").to_string(),
            Self::TwentyFour => time.format("%H:%M").to_string(),
        }
    }
}

/// Field order for displayed dates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum DateFormat {
    /// `10/18/2026`
    #[default]
    Mdy,
    /// `18/10/2026`
    Dmy,
    /// `2026-10-18`
    Ymd,
}

impl DateFormat {
    /// Render a date in this style.
    #[must_use]
    pub fn render(self, date: NaiveDate) -> String {
        match self {
            Self::Mdy => date.format("%m/%d/%Y").to_string(),
            Self::Dmy => date.format("%d/%m/%Y").to_string(),
            Self::Ymd => date.format("%Y-%m-%d").to_string(),
        }
    }
}

/// Calendar display settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarConfig {
    /// First column of the month grid (0 = Sunday, 6 = Saturday).
    #[serde(default = "default_first_day_of_week")]
    pub first_day_of_week: u8,
    /// Clock style.
    #[serde(default)]
    pub time_format: TimeFormat,
    /// Date style.
    #[serde(default)]
    pub date_format: DateFormat,
    /// View shown by `chronowavel view`.
    #[serde(default)]
    pub default_view: ViewMode,
    /// Days covered by the agenda.
    #[serde(default = "default_agenda_days")]
    pub agenda_days: u32,
}

// Default value functions for serde
const fn default_output_format() -> OutputFormat {
    OutputFormat::Pretty
}

const fn default_color() -> ColorSetting {
    ColorSetting::Auto
}

const fn default_first_day_of_week() -> u8 {
    0 // Sunday
}

const fn default_agenda_days() -> u32 {
    7
}

/// Longest agenda window, about ten years.
pub const MAX_AGENDA_DAYS: u32 = 3660;

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_output: default_output_format(),
            color: default_color(),
        }
    }
}

impl Default for CalendarConfig {
    fn default() -> Self {
        Self {
            first_day_of_week: default_first_day_of_week(),
            time_format: TimeFormat::default(),
            date_format: DateFormat::default(),
            default_view: ViewMode::default(),
            agenda_days: default_agenda_days(),
        }
    }
}

impl Config {
    /// Load configuration from the given paths.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load(paths: &Paths) -> Result<Self, ChronoError> {
        Self::load_from_path(&paths.config_file)
    }

    /// Load configuration from a specific path.
    ///
    /// If the config file doesn't exist, returns default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file exists but cannot be parsed.
    pub fn load_from_path(path: &std::path::Path) -> Result<Self, ChronoError> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| {
            ChronoError::Config(format!(
                "Failed to read config file {}: {e}",
                path.display()
            ))
        })?;

        let config: Self = serde_yaml::from_str(&contents).map_err(|e| {
            ChronoError::Config(format!(
                "Failed to parse config file {}: {e}",
                path.display()
            ))
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to the given paths.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save(&self, paths: &Paths) -> Result<(), ChronoError> {
        paths.ensure_dirs()?;
        self.save_to_path(&paths.config_file)
    }

    /// Save configuration to a specific path.
    ///
    /// # Errors
    ///
    /// Returns an error if the config file cannot be written.
    pub fn save_to_path(&self, path: &std::path::Path) -> Result<(), ChronoError> {
        let contents = serde_yaml::to_string(self)
            .map_err(|e| ChronoError::Config(format!("Failed to serialize config: {e}")))?;

        std::fs::write(path, contents).map_err(|e| {
            ChronoError::Config(format!(
                "Failed to write config file {}: {e}",
                path.display()
            ))
        })
    }

    /// Render the configuration as YAML.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn to_yaml(&self) -> Result<String, ChronoError> {
        serde_yaml::to_string(self)
            .map_err(|e| ChronoError::Config(format!("Failed to serialize config: {e}")))
    }

    fn validate(&self) -> Result<(), ChronoError> {
        if self.calendar.first_day_of_week > 6 {
            return Err(ChronoError::Config(format!(
                "first_day_of_week must be 0-6, got {}",
                self.calendar.first_day_of_week
            )));
        }
        if !(1..=MAX_AGENDA_DAYS).contains(&self.calendar.agenda_days) {
            return Err(ChronoError::Config(format!(
                "agenda_days must be 1-{MAX_AGENDA_DAYS}, got {}",
                self.calendar.agenda_days
            )));
        }
        Ok(())
    }
}
