//! Class-list file acting as the document root.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, PoisonError};

use folio_app::ports::StyleSink;
use folio_domain::class_list::ClassList;
use folio_domain::error::FolioError;
use folio_domain::theme::EffectiveTheme;

use crate::error::FsError;

/// Style sink rewriting the theme marker inside a class-list file.
///
/// Tokens other than `light` and `dark` are left untouched, so the file can
/// be shared with whatever else decorates the root.
#[derive(Debug)]
pub struct FileStyleSink {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStyleSink {
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

    /// Read the class list currently in the file.
    ///
    /// Bytes that are not valid UTF-8 are replaced rather than rejected, so a
    /// damaged file is repaired by the next write.
    ///
    /// # Errors
    ///
    /// Returns [`FsError::Io`] when the file exists but cannot be read.
    pub fn classes(&self) -> Result<ClassList, FsError> {
        match std::fs::read(&self.path) {
            Ok(content) => Ok(ClassList::parse(&String::from_utf8_lossy(&content))),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(ClassList::new()),
            Err(source) => Err(FsError::Io {
                path: self.path.clone(),
                source,
            }),
        }
    }

    fn write(&self, theme: EffectiveTheme) -> Result<(), FsError> {
        let _guard = self.write_lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut classes = self.classes()?;
        classes.set_theme(theme);
        let io_err = |source| FsError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(io_err)?;
        }
        std::fs::write(&self.path, format!("{classes}\n")).map_err(io_err)
    }
}

impl StyleSink for FileStyleSink {
    fn apply_style(&self, theme: EffectiveTheme) -> Result<(), FolioError> {
        self.write(theme)?;
        tracing::trace!(path = %self.path.display(), %theme, "theme marker written");
        Ok(())
    }
}
