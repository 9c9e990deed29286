//! Path management for MoneyTrack
//!
//! ## Path Resolution Order
//!
//! 1. `MONEYTRACK_DATA_DIR` environment variable (if set)
//! 2. The platform data directory for `moneytrack` (e.g. `~/.local/share/moneytrack`)

use std::path::PathBuf;

use directories::ProjectDirs;

use crate::error::MoneyTrackError;

/// Environment variable that overrides the base directory
pub const DATA_DIR_ENV: &str = "MONEYTRACK_DATA_DIR";

/// Manages all paths used by MoneyTrack
#[derive(Debug, Clone)]
pub struct MoneyTrackPaths {
    base_dir: PathBuf,
}

impl MoneyTrackPaths {
    /// Resolve paths from the environment or the platform defaults
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined.
    pub fn new() -> Result<Self, MoneyTrackError> {
        let base_dir = match std::env::var(DATA_DIR_ENV) {
            Ok(custom) if !custom.trim().is_empty() => PathBuf::from(custom),
            _ => resolve_default_path()?,
        };

        Ok(Self { base_dir })
    }

    /// Create paths under a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &PathBuf {
        &self.base_dir
    }

    /// Directory holding the persisted ledger blobs
    pub fn data_dir(&self) -> PathBuf {
        self.base_dir.join("data")
    }

    /// Default destination for CSV and backup exports
    pub fn exports_dir(&self) -> PathBuf {
        self.base_dir.join("exports")
    }

    /// Path to the activity log
    pub fn activity_log(&self) -> PathBuf {
        self.base_dir.join("activity.log")
    }

    /// Ensure all required directories exist
    pub fn ensure_directories(&self) -> Result<(), MoneyTrackError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| MoneyTrackError::Io(format!("Failed to create base directory: {}", e)))?;

        std::fs::create_dir_all(self.data_dir())
            .map_err(|e| MoneyTrackError::Io(format!("Failed to create data directory: {}", e)))?;

        std::fs::create_dir_all(self.exports_dir()).map_err(|e| {
            MoneyTrackError::Io(format!("Failed to create exports directory: {}", e))
        })?;

        Ok(())
    }
}

fn resolve_default_path() -> Result<PathBuf, MoneyTrackError> {
    ProjectDirs::from("", "", "moneytrack")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .ok_or_else(|| {
            MoneyTrackError::Config(format!(
                "Could not determine a data directory; set {}",
                DATA_DIR_ENV
            ))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyTrackPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.data_dir(), temp_dir.path().join("data"));
        assert_eq!(paths.exports_dir(), temp_dir.path().join("exports"));
        assert_eq!(paths.activity_log(), temp_dir.path().join("activity.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let paths = MoneyTrackPaths::with_base_dir(temp_dir.path().join("nested"));

        paths.ensure_directories().unwrap();

        assert!(paths.data_dir().exists());
        assert!(paths.exports_dir().exists());
    }
}
