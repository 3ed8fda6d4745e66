//! Theme preference and effective theme.
//!
//! A [`Preference`] is what the user asked for. An [`EffectiveTheme`] is what
//! gets rendered. The two are linked by [`resolve`], which only consults the
//! live system signal when the preference is [`Preference::System`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParsePreferenceError;

/// The user's requested theme mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preference {
    Light,
    Dark,
    #[default]
    System,
}

impl Preference {
    /// Every preference, in menu order.
    pub const ALL: [Self; 3] = [Self::Light, Self::Dark, Self::System];

    /// The token used for persistence (`"light"`, `"dark"`, `"system"`).
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    /// Capitalized name for menus and buttons.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
            Self::System => "System",
        }
    }

    /// Whether this preference defers to the system signal.
    #[must_use]
    pub fn follows_system(self) -> bool {
        matches!(self, Self::System)
    }
}

impl fmt::Display for Preference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Preference {
    type Err = ParsePreferenceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            "system" => Ok(Self::System),
            other => Err(ParsePreferenceError {
                value: other.to_string(),
            }),
        }
    }
}

impl From<EffectiveTheme> for Preference {
    fn from(theme: EffectiveTheme) -> Self {
        match theme {
            EffectiveTheme::Light => Self::Light,
            EffectiveTheme::Dark => Self::Dark,
        }
    }
}

/// The concrete theme actually rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EffectiveTheme {
    Light,
    Dark,
}

impl EffectiveTheme {
    /// Map the "prefers dark" system signal onto a theme.
    #[must_use]
    pub fn from_signal(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// The class token written on the rendering surface.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// The opposite theme; what a binary toggle switches to.
    #[must_use]
    pub fn toggle_target(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub fn is_light(self) -> bool {
        matches!(self, Self::Light)
    }
}

impl fmt::Display for EffectiveTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Resolve a preference against the system signal.
///
/// Concrete preferences are returned as-is; [`Preference::System`] maps to
/// dark exactly when `prefers_dark` is set.
#[must_use]
pub fn resolve(preference: Preference, prefers_dark: bool) -> EffectiveTheme {
    match preference {
        Preference::Light => EffectiveTheme::Light,
        Preference::Dark => EffectiveTheme::Dark,
        Preference::System => EffectiveTheme::from_signal(prefers_dark),
    }
}
