//! Common error types used across the workspace.
//!
//! Each layer defines its own typed errors and converts into [`FolioError`]
//! via `From` when crossing a port boundary.

/// Top-level error carried across port boundaries.
#[derive(Debug, thiserror::Error)]
pub enum FolioError {
    /// A persisted value could not be interpreted.
    #[error("parse error")]
    Parse(#[from] ParsePreferenceError),

    /// The persistent key/value store failed.
    #[error("storage error")]
    Storage(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// A string that is not one of the preference tokens.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown theme preference {value:?}, expected one of light, dark, system")]
pub struct ParsePreferenceError {
    pub value: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_display_offending_value() {
        let err = ParsePreferenceError {
            value: "blue".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "unknown theme preference \"blue\", expected one of light, dark, system"
        );
    }

    #[test]
    fn should_convert_parse_error_into_folio_error() {
        let err: FolioError = ParsePreferenceError {
            value: "x".to_string(),
        }
        .into();
        assert!(matches!(err, FolioError::Parse(_)));
    }

    #[test]
    fn should_keep_storage_source() {
        let io = std::io::Error::other("disk full");
        let err = FolioError::Storage(Box::new(io));
        let source = std::error::Error::source(&err).unwrap();
        assert_eq!(source.to_string(), "disk full");
    }
}
