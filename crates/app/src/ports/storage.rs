//! Storage port: the persistent key/value entry holding the preference.

use std::sync::Arc;

use folio_domain::error::FolioError;

/// Best-effort persistent string storage.
///
/// Values must survive a process restart. Callers treat every error as
/// "nothing stored", so implementations should not retry internally.
pub trait PreferenceStorage: Send + Sync {
    /// Read the value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] when the backing store cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, FolioError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] when the backing store cannot be written.
    fn set(&self, key: &str, value: &str) -> Result<(), FolioError>;
}

impl<T: PreferenceStorage + ?Sized> PreferenceStorage for Arc<T> {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        (**self).set(key, value)
    }
}
