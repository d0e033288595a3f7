//! Duration, color and category classification.

use super::keywords::{first_match, CATEGORY_RULES, COLOR_RULES, DURATION_RULES};
use crate::core::{Category, EventColor};

/// Duration in minutes named by a recognized phrase, if any.
#[must_use]
pub fn find_duration(text: &str) -> Option<u32> {
    first_match(DURATION_RULES, text)
}

/// Color triggered by a keyword, if any.
#[must_use]
pub fn find_color(text: &str) -> Option<EventColor> {
    first_match(COLOR_RULES, text)
}

/// Category triggered by a keyword, if any.
#[must_use]
pub fn find_category(text: &str) -> Option<Category> {
    first_match(CATEGORY_RULES, text)
}
