//! Color theme state.

use crate::persist::ThemeStore;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::{info, warn};

/// Available color themes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Light background.
    Light,
    /// Dark background. Also the look of an unset theme.
    Dark,
}

impl Theme {
    /// Persisted name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized theme name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown theme {0:?} (expected \"light\" or \"dark\")")]
pub struct UnknownTheme(pub String);

impl FromStr for Theme {
    type Err = UnknownTheme;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(UnknownTheme(other.to_string())),
        }
    }
}

/// Current theme, `None` until one is chosen or restored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ThemeState {
    current: Option<Theme>,
}

impl ThemeState {
    /// Start from an explicit theme (or none).
    pub fn new(current: Option<Theme>) -> Self {
        Self { current }
    }

    /// Restore the persisted theme, else use `fallback`.
    ///
    /// An unreadable store is logged and treated as "nothing saved".
    pub fn load(store: &dyn ThemeStore, fallback: Option<Theme>) -> Self {
        let saved = match store.load() {
            Ok(saved) => saved,
            Err(e) => {
                warn!(error = %e, "Ignoring unreadable saved theme");
                None
            }
        };
        Self {
            current: saved.or(fallback),
        }
    }

    /// The chosen theme, if any.
    pub fn current(&self) -> Option<Theme> {
        self.current
    }

    /// Theme used for drawing.
    pub fn effective(&self) -> Theme {
        self.current.unwrap_or(Theme::Dark)
    }

    /// Switch to dark if currently light, otherwise to light, and persist it.
    ///
    /// A failed save is logged; the in-memory switch still happens.
    pub fn toggle(&mut self, store: &mut dyn ThemeStore) -> Theme {
        let next = match self.current {
            Some(Theme::Light) => Theme::Dark,
            _ => Theme::Light,
        };
        self.current = Some(next);
        match store.save(next) {
            Ok(()) => info!(theme = %next, "Theme saved"),
            Err(e) => warn!(error = %e, theme = %next, "Failed to save theme"),
        }
        next
    }
}
