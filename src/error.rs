//! Error types for chronowavel.

use thiserror::Error;

/// Errors surfaced by the calendar, its storage and the CLI.
///
/// The natural language parser never produces one of these: it always
/// returns a record, and deciding whether that record is usable is left
/// to the caller.
#[derive(Debug, Error)]
pub enum ChronoError {
    /// Configuration could not be read, written or located.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The event store failed to load or persist the collection.
    #[error("Storage error: {0}")]
    Storage(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization failed.
    #[error("JSON error: {0}")]
    Parse(#[from] serde_json::Error),

    /// No event with the given id exists.
    #[error("Event not found: {0}")]
    NotFound(String),

    /// An event failed validation before being stored.
    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    /// A command-line value could not be interpreted.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

impl ChronoError {
    /// Process exit code for this error.
    #[must_use]
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::NotFound(_) => 3,
            Self::InvalidEvent(_) | Self::InvalidInput(_) => 2,
            Self::Config(_) | Self::Storage(_) | Self::Io(_) | Self::Parse(_) => 1,
        }
    }
}
