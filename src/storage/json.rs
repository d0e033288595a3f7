//! JSON file event store.
//!
//! The collection lives at `~/.chronowavel/events.json` as a pretty-printed
//! array. A missing file is an empty calendar.

use std::path::{Path, PathBuf};

use super::EventStore;
use crate::calendar::Event;
use crate::error::ChronoError;

/// Event store backed by one JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Open the store at a specific path. Nothing is touched on disk yet.
    #[must_use]
    pub fn open_at(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl EventStore for JsonFileStore {
    fn load(&self) -> Result<Vec<Event>, ChronoError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }

        let contents = std::fs::read_to_string(&self.path).map_err(|e| {
            ChronoError::Storage(format!("Failed to read {}: {e}", self.path.display()))
        })?;

        if contents.trim().is_empty() {
            return Ok(Vec::new());
        }

        let events: Vec<Event> = serde_json::from_str(&contents).map_err(|e| {
            ChronoError::Storage(format!("Failed to decode {}: {e}", self.path.display()))
        })?;
        tracing::debug!(path = %self.path.display(), count = events.len(), "loaded events");
        Ok(events)
    }

    fn save(&self, events: &[Event]) -> Result<(), ChronoError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ChronoError::Storage(format!(
                        "Failed to create directory {}: {e}",
                        parent.display()
                    ))
                })?;
            }
        }

        let contents = serde_json::to_string_pretty(events)?;
        std::fs::write(&self.path, contents).map_err(|e| {
            ChronoError::Storage(format!("Failed to write {}: {e}", self.path.display()))
        })?;
        tracing::debug!(path = %self.path.display(), count = events.len(), "saved events");
        Ok(())
    }

    fn clear(&self) -> Result<(), ChronoError> {
        if self.path.exists() {
            std::fs::remove_file(&self.path).map_err(|e| {
                ChronoError::Storage(format!("Failed to remove {}: {e}", self.path.display()))
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use chrono::{NaiveDate, NaiveTime};
    use tempfile::TempDir;

    use super::*;
    use crate::calendar::Priority;
    use crate::core::{Category, EventColor};

    fn event(id: &str) -> Event {
        Event {
            id: id.to_string(),
            title: "Review".to_string(),
            description: String::new(),
            date: NaiveDate::from_ymd_opt(2026, 10, 20).unwrap(),
            time: NaiveTime::from_hms_opt(15, 0, 0).unwrap(),
            duration: 60,
            color: EventColor::Purple,
            category: Category::General,
            reminders: vec![15],
            location: String::new(),
            attendees: vec!["sam".to_string()],
            priority: Priority::High,
            notes: String::new(),
            created_at: NaiveDate::from_ymd_opt(2026, 10, 18)
                .unwrap()
                .and_hms_opt(9, 0, 0)
                .unwrap(),
            updated_at: None,
        }
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open_at(&temp_dir.path().join("events.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open_at(&temp_dir.path().join("events.json"));

        store.save(&[event("a"), event("b")]).unwrap();
        let loaded = store.load().unwrap();

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0], event("a"));
        assert_eq!(loaded[1].id, "b");
    }

    #[test]
    fn test_save_overwrites_collection() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open_at(&temp_dir.path().join("events.json"));

        store.save(&[event("a"), event("b")]).unwrap();
        store.save(&[event("c")]).unwrap();

        let loaded = store.load().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, "c");
    }

    #[test]
    fn test_save_creates_parent_dirs() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("events.json");
        let store = JsonFileStore::open_at(&path);

        store.save(&[event("a")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_clear_removes_file() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonFileStore::open_at(&temp_dir.path().join("events.json"));

        store.save(&[event("a")]).unwrap();
        store.clear().unwrap();

        assert!(!store.path().exists());
        assert!(store.load().unwrap().is_empty());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_corrupt_file_is_storage_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("events.json");
        std::fs::write(&path, "{ not json").unwrap();

        let store = JsonFileStore::open_at(&path);
        assert!(matches!(store.load(), Err(ChronoError::Storage(_))));
    }
}
