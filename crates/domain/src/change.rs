//! Theme change: the notification broadcast whenever a theme is applied.

use serde::{Deserialize, Serialize};

use crate::id::ChangeId;
use crate::theme::{EffectiveTheme, Preference};
use crate::time::{Timestamp, now};

/// Broadcast payload carrying the preference and what it resolved to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThemeChange {
    pub id: ChangeId,
    pub preference: Preference,
    pub effective: EffectiveTheme,
    pub timestamp: Timestamp,
}

impl ThemeChange {
    /// Create a change record stamped with the current time.
    #[must_use]
    pub fn new(preference: Preference, effective: EffectiveTheme) -> Self {
        Self {
            id: ChangeId::new(),
            preference,
            effective,
            timestamp: now(),
        }
    }
}
