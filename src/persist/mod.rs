//! Persisted view state (impure edges).
//!
//! - [`fragment`] - open section ids in the page-address fragment
//! - [`theme_store`] - the chosen color theme

pub mod fragment;
pub mod theme_store;

pub use fragment::{decode_into, encode, RestoreReport};
pub use theme_store::{default_theme_path, FileThemeStore, MemoryThemeStore, ThemeStore};

use std::path::PathBuf;
use thiserror::Error;

/// Errors reading or writing persisted state.
#[derive(Debug, Error)]
pub enum PersistError {
    /// Reading or writing the backing file failed.
    #[error("Failed to access {path:?}: {source}")]
    Io {
        /// File that failed.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The stored theme name is not recognized.
    #[error(transparent)]
    UnknownTheme(#[from] crate::state::UnknownTheme),
}
