//! JSON file preference storage.

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use folio_app::ports::PreferenceStorage;
use folio_domain::error::FolioError;

use crate::error::FsError;

type Entries = BTreeMap<String, String>;

/// Key/value storage persisted as a flat JSON object.
///
/// A missing file reads as empty. Writes go through a sibling temporary file
/// and a rename so readers never observe a half-written object.
#[derive(Debug)]
pub struct FilePreferenceStorage {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FilePreferenceStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Entries, FsError> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Entries::new()),
            Err(source) => {
                return Err(FsError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };
        if content.trim().is_empty() {
            return Ok(Entries::new());
        }
        serde_json::from_str(&content).map_err(|source| FsError::Json {
            path: self.path.clone(),
            source,
        })
    }

    fn write_entries(&self, entries: &Entries) -> Result<(), FsError> {
        let io_err = |source| FsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        let content = serde_json::to_string_pretty(entries).map_err(|source| FsError::Json {
            path: self.path.clone(),
            source,
        })?;
        let staging = self.path.with_extension("tmp");
        std::fs::write(&staging, content).map_err(io_err)?;
        std::fs::rename(&staging, &self.path).map_err(io_err)
    }
}

impl PreferenceStorage for FilePreferenceStorage {
    fn get(&self, key: &str) -> Result<Option<String>, FolioError> {
        Ok(self.read_entries()?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), FolioError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut entries = self.read_entries().unwrap_or_else(|err| {
            tracing::warn!(%err, "discarding unreadable storage file");
            Entries::new()
        });
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries)?;
        Ok(())
    }
}
