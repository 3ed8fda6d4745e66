//! Filesystem-specific error type.

use std::path::PathBuf;

use folio_domain::error::FolioError;

/// Errors originating from the filesystem adapters.
#[derive(Debug, thiserror::Error)]
pub enum FsError {
    /// Reading or writing a file failed.
    #[error("failed to access {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The storage file is not a JSON object of strings.
    #[error("malformed storage file {path}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl From<FsError> for FolioError {
    fn from(err: FsError) -> Self {
        Self::Storage(Box::new(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_path_in_io_error() {
        let err = FsError::Io {
            path: PathBuf::from("/tmp/theme.json"),
            source: std::io::Error::other("denied"),
        };
        assert_eq!(err.to_string(), "failed to access /tmp/theme.json");
    }

    #[test]
    fn should_convert_into_storage_error() {
        let err: FolioError = FsError::Io {
            path: PathBuf::from("x"),
            source: std::io::Error::other("denied"),
        }
        .into();
        assert!(matches!(err, FolioError::Storage(_)));
    }
}
