//! File-backed key-value store
//!
//! Each key is stored as `<dir>/<key>.json` and written atomically.

use std::path::{Path, PathBuf};

use crate::error::{MoneyTrackError, MoneyTrackResult};

use super::file_io::{read_text, write_atomic};
use super::KeyValueStore;

/// A key-value store backed by one file per key
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `dir` (created lazily on first write)
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file backing `key`
    pub fn path_for(&self, key: &str) -> MoneyTrackResult<PathBuf> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(MoneyTrackError::Storage(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> MoneyTrackResult<Option<String>> {
        read_text(self.path_for(key)?)
    }

    fn save(&mut self, key: &str, value: &str) -> MoneyTrackResult<()> {
        write_atomic(self.path_for(key)?, value)
    }
}
