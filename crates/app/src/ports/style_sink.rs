//! Style sink port: the single mutation point of the rendering surface.

use std::sync::Arc;

use folio_domain::error::FolioError;
use folio_domain::theme::EffectiveTheme;

/// Receives the effective theme and marks the rendering surface with it.
///
/// After a successful call exactly one theme marker is present on the
/// surface, the one for `theme`.
pub trait StyleSink: Send + Sync {
    /// Replace the surface's theme marker with `theme`.
    ///
    /// # Errors
    ///
    /// Returns [`FolioError::Storage`] when the surface cannot be updated.
    fn apply_style(&self, theme: EffectiveTheme) -> Result<(), FolioError>;
}

impl<T: StyleSink + ?Sized> StyleSink for Arc<T> {
    fn apply_style(&self, theme: EffectiveTheme) -> Result<(), FolioError> {
        (**self).apply_style(theme)
    }
}
