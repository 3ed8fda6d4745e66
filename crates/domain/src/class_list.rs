//! Class list: the ordered set of style tokens on the rendering surface root.
//!
//! The theme markers `light` and `dark` are mutually exclusive: applying one
//! always removes the other. Unrelated tokens are preserved in order.

use std::fmt;

use crate::theme::EffectiveTheme;

const THEME_MARKERS: [EffectiveTheme; 2] = [EffectiveTheme::Light, EffectiveTheme::Dark];

/// Whitespace-separated class tokens, without duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassList {
    tokens: Vec<String>,
}

impl ClassList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a whitespace-separated class attribute, dropping duplicates.
    #[must_use]
    pub fn parse(value: &str) -> Self {
        let mut list = Self::new();
        for token in value.split_whitespace() {
            list.add(token);
        }
        list
    }

    /// Add `token` unless already present.
    pub fn add(&mut self, token: &str) {
        if !self.contains(token) {
            self.tokens.push(token.to_string());
        }
    }

    /// Remove `token` if present.
    pub fn remove(&mut self, token: &str) {
        self.tokens.retain(|t| t != token);
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Replace any theme marker with `theme`.
    pub fn set_theme(&mut self, theme: EffectiveTheme) {
        for marker in THEME_MARKERS {
            self.remove(marker.as_str());
        }
        self.add(theme.as_str());
    }

    /// The theme marker currently present, if any.
    #[must_use]
    pub fn theme(&self) -> Option<EffectiveTheme> {
        THEME_MARKERS
            .into_iter()
            .find(|marker| self.contains(marker.as_str()))
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }
}

impl fmt::Display for ClassList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.tokens.join(" "))
    }
}
