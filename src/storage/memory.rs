//! In-memory key-value store
//!
//! Behaves like browser local storage: a flat string map with an optional
//! size quota. Writes that would exceed the quota fail and leave the store
//! untouched.

use std::collections::HashMap;

use crate::error::{MoneyTrackError, MoneyTrackResult};

use super::KeyValueStore;

/// A key-value store held in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
    quota: Option<usize>,
}

impl MemoryStore {
    /// Create an empty store without a quota
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store limited to `bytes` of keys plus values
    pub fn with_quota(bytes: usize) -> Self {
        Self {
            entries: HashMap::new(),
            quota: Some(bytes),
        }
    }

    /// Change the quota; existing entries are kept even if over the limit
    pub fn set_quota(&mut self, quota: Option<usize>) {
        self.quota = quota;
    }

    /// Bytes currently used by keys and values
    pub fn used_bytes(&self) -> usize {
        self.entries.iter().map(|(k, v)| k.len() + v.len()).sum()
    }

    /// Raw access to a stored value
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Remove a key, returning whether it existed
    pub fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl KeyValueStore for MemoryStore {
    fn load(&self, key: &str) -> MoneyTrackResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, value: &str) -> MoneyTrackResult<()> {
        if let Some(quota) = self.quota {
            let current = self.entries.get(key).map(|v| key.len() + v.len()).unwrap_or(0);
            let needed = self.used_bytes() - current + key.len() + value.len();
            if needed > quota {
                return Err(MoneyTrackError::Storage(format!(
                    "Quota exceeded writing {} ({} of {} bytes)",
                    key, needed, quota
                )));
            }
        }

        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
