//! The event store seam.

use crate::calendar::Event;
use crate::error::ChronoError;

/// Persistence for the event collection.
///
/// Implementations store the whole collection at once; there is no
/// per-event write and no transaction beyond replacing the previous copy.
#[cfg_attr(test, mockall::automock)]
pub trait EventStore {
    /// Load every stored event. A store that was never written is empty.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data cannot be read or decoded.
    fn load(&self) -> Result<Vec<Event>, ChronoError>;

    /// Replace the stored collection with `events`.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be written.
    fn save(&self, events: &[Event]) -> Result<(), ChronoError>;

    /// Remove every stored event.
    ///
    /// # Errors
    ///
    /// Returns an error if the stored data cannot be removed.
    fn clear(&self) -> Result<(), ChronoError>;
}
