//! Memory-backed preference storage.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use folio_app::ports::PreferenceStorage;
use folio_domain::error::FolioError;

/// Key/value storage living as long as the value itself.
#[derive(Debug, Default)]
pub struct InMemoryStorage {
    values: Mutex<HashMap<String, String>>,
}

impl InMemoryStorage {
    /// Storage pre-filled with `entries`.
    pub fn with_entries<'a>(entries: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let values = entries
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Self {
            values: Mutex::new(values),
        }
    }

    /// Number of stored keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<String, String>> {
        self.values.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl PreferenceStorage for InMemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        Ok(self.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        self.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_start_empty() {
        let storage = InMemoryStorage::default();
        assert!(storage.is_empty());
        assert_eq!(storage.get("theme").unwrap(), None);
    }

    #[test]
    fn should_overwrite_existing_value() {
        let storage = InMemoryStorage::with_entries([("theme", "light")]);
        storage.set("theme", "dark").unwrap();
        assert_eq!(storage.get("theme").unwrap().as_deref(), Some("dark"));
        assert_eq!(storage.len(), 1);
    }
}
