//! Feature implementations for chronowavel.
//!
//! This module contains the pieces built on top of the calendar:
//! - Natural language parsing
//! - The chat assistant
//! - Voice transcript handling
//! - Notifications

pub mod chat;
pub mod nlp;
pub mod notify;
pub mod voice;
