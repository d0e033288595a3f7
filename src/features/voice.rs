//! Voice input: turn a speech-to-text transcript into an event.

use chrono::NaiveDateTime;

use crate::calendar::{CalendarManager, EventDetails};
use crate::features::nlp::parse_natural_language;
use crate::features::notify::Notification;
use crate::storage::EventStore;

/// Message shown when a transcript could not be turned into an event.
pub const NOT_UNDERSTOOD: &str = "Could not understand. Please try again.";

/// Parse `transcript` and add the resulting event.
///
/// Failures are reported through the returned notification rather than
/// an error, the same way the toast is the only feedback a voice user gets.
pub fn handle_transcript<S: EventStore>(
    manager: &mut CalendarManager<S>,
    transcript: &str,
    now: NaiveDateTime,
) -> Notification {
    if transcript.trim().is_empty() {
        return Notification::error(NOT_UNDERSTOOD);
    }

    let request = parse_natural_language(transcript, now);
    match manager.add_event(request, EventDetails::default(), now) {
        Ok(event) => Notification::success(format!("✓ Created: {}", event.title)),
        Err(e) => {
            tracing::warn!(error = %e, "voice transcript rejected");
            Notification::error(NOT_UNDERSTOOD)
        },
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::calendar::test_manager;
    use crate::error::ChronoError;
    use crate::features::notify::NotificationKind;
    use crate::storage::MockEventStore;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 18)
            .unwrap()
            .and_hms_opt(10, 0, 0)
            .unwrap()
    }

    #[test]
    fn test_transcript_creates_event() {
        let mut manager = test_manager();
        let note = handle_transcript(&mut manager, "Dentist tomorrow at 9am", now());

        assert_eq!(note.kind, NotificationKind::Success);
        assert_eq!(note.message, "✓ Created: Dentist tomorrow");
        assert_eq!(manager.events().len(), 1);
    }

    #[test]
    fn test_blank_transcript_is_error() {
        let mut manager = test_manager();
        let note = handle_transcript(&mut manager, "  ", now());

        assert!(note.is_error());
        assert_eq!(note.message, NOT_UNDERSTOOD);
        assert!(manager.events().is_empty());
    }

    #[test]
    fn test_store_failure_is_error() {
        let mut store = MockEventStore::new();
        store.expect_load().returning(|| Ok(Vec::new()));
        store
            .expect_save()
            .returning(|_| Err(ChronoError::Storage("read-only".to_string())));
        let mut manager = CalendarManager::load(store).unwrap();

        let note = handle_transcript(&mut manager, "Lunch today", now());
        assert!(note.is_error());
    }
}
