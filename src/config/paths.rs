//! Path resolution for chronowavel configuration and data files.
//!
//! All data is stored in `~/.chronowavel/`:
//! - `config.yaml` - Main configuration file
//! - `events.json` - The event collection

use std::path::PathBuf;

use crate::error::ChronoError;

/// Paths to chronowavel configuration and data files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paths {
    /// Root directory: `~/.chronowavel/`
    pub root: PathBuf,
    /// Config file: `~/.chronowavel/config.yaml`
    pub config_file: PathBuf,
    /// Event collection: `~/.chronowavel/events.json`
    pub events_file: PathBuf,
}

impl Paths {
    /// Create paths based on the user's home directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> Result<Self, ChronoError> {
        let home = std::env::var("HOME").map_err(|_| {
            ChronoError::Config("Could not determine home directory".to_string())
        })?;

        Ok(Self::with_root(PathBuf::from(home).join(".chronowavel")))
    }

    /// Create paths with a custom root directory.
    #[must_use]
    pub fn with_root(root: PathBuf) -> Self {
        Self {
            config_file: root.join("config.yaml"),
            events_file: root.join("events.json"),
            root,
        }
    }

    /// Use `root` when given, otherwise the home directory default.
    ///
    /// # Errors
    ///
    /// Returns an error if no root is given and the home directory cannot be
    /// determined.
    pub fn resolve(root: Option<PathBuf>) -> Result<Self, ChronoError> {
        root.map_or_else(Self::new, |root| Ok(Self::with_root(root)))
    }

    /// Ensure the root directory exists.
    ///
    /// # Errors
    ///
    /// Returns an error if directory creation fails.
    pub fn ensure_dirs(&self) -> Result<(), ChronoError> {
        if !self.root.exists() {
            std::fs::create_dir_all(&self.root).map_err(|e| {
                ChronoError::Config(format!(
                    "Failed to create directory {}: {e}",
                    self.root.display()
                ))
            })?;
        }
        Ok(())
    }
}

impl Default for Paths {
    fn default() -> Self {
        Self::new().unwrap_or_else(|_| {
            // Fallback to current directory if home cannot be determined
            Self::with_root(PathBuf::from(".chronowavel"))
        })
    }
}
