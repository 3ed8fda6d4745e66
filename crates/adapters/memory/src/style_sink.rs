//! Style sink recording every theme it receives.

use std::sync::{Mutex, MutexGuard, PoisonError};

use folio_app::ports::StyleSink;
use folio_domain::class_list::ClassList;
use folio_domain::error::FolioError;
use folio_domain::theme::EffectiveTheme;

#[derive(Debug, Default)]
struct Surface {
    classes: ClassList,
    history: Vec<EffectiveTheme>,
}

/// In-memory rendering surface.
#[derive(Debug, Default)]
pub struct RecordingStyleSink {
    surface: Mutex<Surface>,
}

impl RecordingStyleSink {
    /// A surface whose root already carries `classes`.
    #[must_use]
    pub fn with_classes(classes: &str) -> Self {
        Self {
            surface: Mutex::new(Surface {
                classes: ClassList::parse(classes),
                history: Vec::new(),
            }),
        }
    }

    /// Current root class list.
    #[must_use]
    pub fn classes(&self) -> ClassList {
        self.lock().classes.clone()
    }

    /// The theme marker present on the root, if any.
    #[must_use]
    pub fn current(&self) -> Option<EffectiveTheme> {
        self.lock().classes.theme()
    }

    /// Every theme applied so far, oldest first.
    #[must_use]
    pub fn history(&self) -> Vec<EffectiveTheme> {
        self.lock().history.clone()
    }

    fn lock(&self) -> MutexGuard<'_, Surface> {
        self.surface.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StyleSink for RecordingStyleSink {
    fn apply_style(&self, theme: EffectiveTheme) -> Result<(), FolioError> {
        let mut surface = self.lock();
        surface.classes.set_theme(theme);
        surface.history.push(theme);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_have_no_marker_initially() {
        let sink = RecordingStyleSink::default();
        assert_eq!(sink.current(), None);
        assert!(sink.history().is_empty());
    }

    #[test]
    fn should_replace_marker_and_record_history() {
        let sink = RecordingStyleSink::with_classes("font-sans light");
        sink.apply_style(EffectiveTheme::Dark).unwrap();
        sink.apply_style(EffectiveTheme::Dark).unwrap();

        assert_eq!(sink.classes().to_string(), "font-sans dark");
        assert_eq!(sink.history(), [EffectiveTheme::Dark, EffectiveTheme::Dark]);
    }
}
