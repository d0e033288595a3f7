//! Storage layer for chronowavel.
//!
//! Events are persisted as a single JSON document that is rewritten in
//! full on every save. The [`EventStore`] trait is the seam the calendar
//! manager talks to.

mod json;
mod store;

pub use json::JsonFileStore;
#[cfg(test)]
pub use store::MockEventStore;
pub use store::EventStore;
