//! Storage layer for MoneyTrack
//!
//! The ledger persists through a small string-keyed text store holding three
//! independent JSON blobs: transactions, categories and settings. A store's
//! `save` may fail (quota, disk); failures come back as
//! [`MoneyTrackError::Storage`] values.

pub mod file_io;
pub mod file_store;
pub mod memory;

pub use file_io::{read_text, write_atomic};
pub use file_store::FileStore;
pub use memory::MemoryStore;

use serde::{de::DeserializeOwned, Serialize};

use crate::error::{MoneyTrackError, MoneyTrackResult};

/// Key of the transaction list blob
pub const TRANSACTIONS_KEY: &str = "moneytrack_transactions";
/// Key of the category list blob
pub const CATEGORIES_KEY: &str = "moneytrack_categories";
/// Key of the settings blob
pub const SETTINGS_KEY: &str = "moneytrack_settings";

/// A string-keyed text store
pub trait KeyValueStore {
    /// Read the value stored under `key`, if any
    fn load(&self, key: &str) -> MoneyTrackResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value
    fn save(&mut self, key: &str, value: &str) -> MoneyTrackResult<()>;
}

impl<S: KeyValueStore + ?Sized> KeyValueStore for Box<S> {
    fn load(&self, key: &str) -> MoneyTrackResult<Option<String>> {
        (**self).load(key)
    }

    fn save(&mut self, key: &str, value: &str) -> MoneyTrackResult<()> {
        (**self).save(key, value)
    }
}

/// Load and parse a JSON blob
pub fn load_json<T, S>(store: &S, key: &str) -> MoneyTrackResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStore + ?Sized,
{
    match store.load(key)? {
        Some(text) => serde_json::from_str(&text)
            .map(Some)
            .map_err(|e| MoneyTrackError::Storage(format!("Failed to parse {}: {}", key, e))),
        None => Ok(None),
    }
}

/// Serialize and save a JSON blob
pub fn save_json<T, S>(store: &mut S, key: &str, value: &T) -> MoneyTrackResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStore + ?Sized,
{
    let text = serde_json::to_string(value)
        .map_err(|e| MoneyTrackError::Storage(format!("Failed to serialize {}: {}", key, e)))?;
    store.save(key, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        name: String,
    }

    #[test]
    fn test_json_round_trip_through_store() {
        let mut store = MemoryStore::new();
        assert_eq!(load_json::<Blob, _>(&store, "k").unwrap(), None);

        save_json(&mut store, "k", &Blob { name: "x".into() }).unwrap();
        assert_eq!(
            load_json::<Blob, _>(&store, "k").unwrap(),
            Some(Blob { name: "x".into() })
        );
    }

    #[test]
    fn test_unparseable_blob_is_a_storage_error() {
        let mut store = MemoryStore::new();
        store.save("k", "not json").unwrap();

        let err = load_json::<Blob, _>(&store, "k").unwrap_err();
        assert!(err.is_storage());
        assert!(err.to_string().contains("Failed to parse k"));
    }

    #[test]
    fn test_boxed_store() {
        let mut store: Box<dyn KeyValueStore> = Box::new(MemoryStore::new());
        save_json(&mut store, "k", &vec![1, 2, 3]).unwrap();
        assert_eq!(load_json::<Vec<i32>, _>(&store, "k").unwrap(), Some(vec![1, 2, 3]));
    }
}
