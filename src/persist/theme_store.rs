//! Theme persistence.

use super::PersistError;
use crate::state::Theme;
use std::path::{Path, PathBuf};

/// Where the chosen theme is remembered between runs.
pub trait ThemeStore {
    /// The saved theme, `Ok(None)` if nothing was saved yet.
    fn load(&self) -> Result<Option<Theme>, PersistError>;

    /// Remember `theme`.
    fn save(&mut self, theme: Theme) -> Result<(), PersistError>;
}

/// Default theme file: `<state dir>/knowdex/theme`, or `./knowdex-theme`.
pub fn default_theme_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("knowdex").join("theme")
    } else {
        PathBuf::from("knowdex-theme")
    }
}

// ===== FileThemeStore =====

/// Theme stored as a single word in a text file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileThemeStore {
    path: PathBuf,
}

impl FileThemeStore {
    /// Store backed by `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> PersistError {
        PersistError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ThemeStore for FileThemeStore {
    fn load(&self) -> Result<Option<Theme>, PersistError> {
        if !self.path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(&self.path).map_err(|e| self.io_error(e))?;
        let theme = contents.parse::<Theme>()?;
        Ok(Some(theme))
    }

    fn save(&mut self, theme: Theme) -> Result<(), PersistError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| self.io_error(e))?;
            }
        }
        std::fs::write(&self.path, theme.as_str()).map_err(|e| self.io_error(e))
    }
}

// ===== MemoryThemeStore =====

/// Volatile store for tests and one-shot commands.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MemoryThemeStore {
    saved: Option<Theme>,
}

impl MemoryThemeStore {
    /// Store that already holds `theme`.
    pub fn with_saved(theme: Theme) -> Self {
        Self { saved: Some(theme) }
    }

    /// Last saved theme.
    pub fn saved(&self) -> Option<Theme> {
        self.saved
    }
}

impl ThemeStore for MemoryThemeStore {
    fn load(&self) -> Result<Option<Theme>, PersistError> {
        Ok(self.saved)
    }

    fn save(&mut self, theme: Theme) -> Result<(), PersistError> {
        self.saved = Some(theme);
        Ok(())
    }
}
