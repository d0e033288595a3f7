//! Event categories and the display color palette.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChronoError;

/// The domain an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Anything not otherwise classified.
    #[default]
    General,
    /// Work, meetings, office.
    Work,
    /// Personal and family time.
    Personal,
    /// Meetings filed explicitly.
    Meeting,
    /// Public or social events.
    Event,
    /// Exercise and wellbeing.
    Health,
}

impl Category {
    /// All categories in display order.
    pub const ALL: [Self; 6] = [
        Self::General,
        Self::Work,
        Self::Personal,
        Self::Meeting,
        Self::Event,
        Self::Health,
    ];

    /// Lowercase tag used in storage and JSON output.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::General => "general",
            Self::Work => "work",
            Self::Personal => "personal",
            Self::Meeting => "meeting",
            Self::Event => "event",
            Self::Health => "health",
        }
    }

    /// Human readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::General => "General",
            Self::Work => "Work",
            Self::Personal => "Personal",
            Self::Meeting => "Meeting",
            Self::Event => "Event",
            Self::Health => "Health",
        }
    }

    /// Color shown for the category in listings.
    #[must_use]
    pub const fn default_color(self) -> EventColor {
        match self {
            Self::General | Self::Work => EventColor::Blue,
            Self::Personal => EventColor::Green,
            Self::Meeting => EventColor::Purple,
            Self::Event => EventColor::Orange,
            Self::Health => EventColor::Red,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = ChronoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ChronoError::InvalidInput(format!("Unknown category '{s}'")))
    }
}

/// Fixed display palette for events.
///
/// Serialized as the `#RRGGBB` hex token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EventColor {
    /// `#0577FF`
    #[default]
    #[serde(rename = "#0577FF")]
    Blue,
    /// `#8B5CF6`
    #[serde(rename = "#8B5CF6")]
    Purple,
    /// `#10B981`
    #[serde(rename = "#10B981")]
    Green,
    /// `#F59E0B`
    #[serde(rename = "#F59E0B")]
    Orange,
    /// `#EF4444`
    #[serde(rename = "#EF4444")]
    Red,
    /// `#EC4899`
    #[serde(rename = "#EC4899")]
    Pink,
    /// `#14B8A6`
    #[serde(rename = "#14B8A6")]
    Teal,
}

impl EventColor {
    /// Every palette entry.
    pub const ALL: [Self; 7] = [
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Orange,
        Self::Red,
        Self::Pink,
        Self::Teal,
    ];

    /// The `#RRGGBB` token.
    #[must_use]
    pub const fn hex(self) -> &'static str {
        match self {
            Self::Blue => "#0577FF",
            Self::Purple => "#8B5CF6",
            Self::Green => "#10B981",
            Self::Orange => "#F59E0B",
            Self::Red => "#EF4444",
            Self::Pink => "#EC4899",
            Self::Teal => "#14B8A6",
        }
    }

    /// Palette name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Blue => "blue",
            Self::Purple => "purple",
            Self::Green => "green",
            Self::Orange => "orange",
            Self::Red => "red",
            Self::Pink => "pink",
            Self::Teal => "teal",
        }
    }

    /// RGB components, for truecolor terminal output.
    #[must_use]
    pub fn rgb(self) -> (u8, u8, u8) {
        let hex = &self.hex()[1..];
        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap_or(0);
        (channel(0), channel(2), channel(4))
    }
}

impl fmt::Display for EventColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.hex())
    }
}

impl FromStr for EventColor {
    type Err = ChronoError;

    /// Accepts a palette name (`blue`) or its hex token (`#0577FF`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|c| c.name().eq_ignore_ascii_case(s) || c.hex().eq_ignore_ascii_case(s))
            .ok_or_else(|| ChronoError::InvalidInput(format!("Unknown color '{s}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_from_str() {
        assert_eq!("work".parse::<Category>().unwrap(), Category::Work);
        assert_eq!(" Health ".parse::<Category>().unwrap(), Category::Health);
        assert!("chores".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_serde() {
        let json = serde_json::to_string(&Category::Personal).unwrap();
        assert_eq!(json, "\"personal\"");
        let back: Category = serde_json::from_str("\"general\"").unwrap();
        assert_eq!(back, Category::General);
    }

    #[test]
    fn test_color_hex_tokens_are_six_digits() {
        for color in EventColor::ALL {
            let hex = color.hex();
            assert_eq!(hex.len(), 7);
            assert!(hex.starts_with('#'));
            assert!(hex[1..].chars().all(|c| c.is_ascii_hexdigit()));
        }
    }

    #[test]
    fn test_color_serde_uses_hex() {
        let json = serde_json::to_string(&EventColor::Red).unwrap();
        assert_eq!(json, "\"#EF4444\"");
        let back: EventColor = serde_json::from_str("\"#10B981\"").unwrap();
        assert_eq!(back, EventColor::Green);
    }

    #[test]
    fn test_color_from_name_or_hex() {
        assert_eq!("teal".parse::<EventColor>().unwrap(), EventColor::Teal);
        assert_eq!("#0577ff".parse::<EventColor>().unwrap(), EventColor::Blue);
        assert!("magenta".parse::<EventColor>().is_err());
    }

    #[test]
    fn test_color_rgb() {
        assert_eq!(EventColor::Blue.rgb(), (0x05, 0x77, 0xFF));
    }
}
