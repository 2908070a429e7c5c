//! Typed, fail-soft access to records kept in a [`KeyValueStorage`].
//!
//! Records are versionless JSON. A missing key yields the default value and so
//! does a record that no longer parses; the session always starts. Records in
//! the `{"state": ..., "version": N}` envelope used by browser persistence
//! middleware are unwrapped transparently.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use shared_models::StorageError;

use crate::storage::KeyValueStorage;

const ENVELOPE_STATE_FIELD: &str = "state";

pub fn load_or_default<T>(storage: &dyn KeyValueStorage, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    let raw = match storage.get_item(key) {
        Ok(Some(raw)) => raw,
        Ok(None) => {
            debug!("No persisted record under {}, using defaults", key);
            return T::default();
        }
        Err(e) => {
            warn!("Could not read {}: {} - using defaults", key, e);
            return T::default();
        }
    };

    match decode::<T>(&raw) {
        Ok(value) => value,
        Err(e) => {
            warn!("Malformed record under {}: {} - resetting to defaults", key, e);
            T::default()
        }
    }
}

pub fn save<T>(storage: &dyn KeyValueStorage, key: &str, value: &T) -> Result<(), StorageError>
where
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|e| StorageError::serialization(key, e))?;
    storage.set_item(key, &raw)
}

fn decode<T: DeserializeOwned>(raw: &str) -> Result<T, serde_json::Error> {
    let mut value: Value = serde_json::from_str(raw)?;

    if let Some(state) = value
        .as_object_mut()
        .and_then(|object| object.remove(ENVELOPE_STATE_FIELD))
    {
        return serde_json::from_value(state);
    }

    serde_json::from_value(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;
    use serde::Deserialize;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    #[serde(default, rename_all = "camelCase")]
    struct Counter {
        hits: u32,
        label_text: String,
    }

    #[test]
    fn test_missing_key_yields_default() {
        let storage = MemoryStorage::new();
        let counter: Counter = load_or_default(&storage, "counter");
        assert_eq!(counter, Counter::default());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        let counter = Counter { hits: 3, label_text: "x".to_string() };

        save(&storage, "counter", &counter).unwrap();

        assert_eq!(
            storage.get_item("counter").unwrap().as_deref(),
            Some("{\"hits\":3,\"labelText\":\"x\"}")
        );
        assert_eq!(load_or_default::<Counter>(&storage, "counter"), counter);
    }

    #[test]
    fn test_malformed_record_resets_to_default() {
        let storage = MemoryStorage::new();
        storage.set_item("counter", "{not json").unwrap();
        assert_eq!(load_or_default::<Counter>(&storage, "counter"), Counter::default());

        storage.set_item("counter", "{\"hits\":\"many\"}").unwrap();
        assert_eq!(load_or_default::<Counter>(&storage, "counter"), Counter::default());
    }

    #[test]
    fn test_envelope_is_unwrapped() {
        let storage = MemoryStorage::new();
        storage
            .set_item("counter", "{\"state\":{\"hits\":7},\"version\":0}")
            .unwrap();

        let counter: Counter = load_or_default(&storage, "counter");
        assert_eq!(counter.hits, 7);
        assert_eq!(counter.label_text, "");
    }
}
