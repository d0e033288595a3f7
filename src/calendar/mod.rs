//! The calendar: event model, the manager that owns the collection, and
//! month navigation state.

mod manager;
mod types;
mod view;

#[cfg(test)]
pub(crate) use manager::test_manager;
pub use manager::{CalendarManager, GRID_DAYS};
pub use types::{
    CalendarDay, Event, EventDetails, EventStats, EventUpdate, ImportRecord, Priority,
};
pub use view::{CalendarView, ViewMode};
