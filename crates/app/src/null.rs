//! Null provider: port implementations for when no host environment exists.
//!
//! Used during pre-render or headless evaluation: nothing is read, nothing is
//! written, and the system signal never fires. Every store operation then
//! returns its logical default.

use folio_domain::error::FolioError;
use folio_domain::theme::EffectiveTheme;

use crate::ports::{PreferenceStorage, SignalCallback, SignalSource, StyleSink, Subscription};

/// Storage that holds nothing.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStorage;

impl PreferenceStorage for NullStorage {
    fn get(&self, _key: &str) -> Result<Option<String>, FolioError> {
        Ok(None)
    }

    fn set(&self, _key: &str, _value: &str) -> Result<(), FolioError> {
        Ok(())
    }
}

/// A rendering surface that does not exist.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullStyleSink;

impl StyleSink for NullStyleSink {
    fn apply_style(&self, _theme: EffectiveTheme) -> Result<(), FolioError> {
        Ok(())
    }
}

/// A signal stuck at "prefers light" that never changes.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSignalSource;

impl SignalSource for NullSignalSource {
    fn prefers_dark(&self) -> bool {
        false
    }

    fn watch(&self, _on_change: SignalCallback) -> Subscription {
        Subscription::noop()
    }
}
