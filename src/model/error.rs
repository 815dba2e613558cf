//! Error types for knowdex.
//!
//! This module defines the error taxonomy using `thiserror`. Errors compose via `?` and
//! `From` conversions into [`AppError`].
//!
//! # Error Hierarchy
//!
//! - [`AppError`] - Top-level error returned by the binary
//!   - [`IndexError`] - Index document loading and validation failures
//!   - [`crate::config::ConfigError`] - Config file read/parse failures
//!   - [`crate::persist::PersistError`] - Theme persistence failures
//!   - [`crate::builder::BuildError`] - Index generation failures
//!   - [`crate::logging::LoggingError`] - Tracing setup failures
//!   - [`crate::view::TuiError`] - Terminal failures
//!
//! # Recovery Strategy
//!
//! The search core is total and has no error type. Missing optional widgets, stale
//! fragment ids and unreadable persisted themes are logged and skipped. Only failures
//! that leave nothing to show (unreadable index, broken terminal) are fatal.

use std::path::PathBuf;
use thiserror::Error;

use super::InvalidSectionId;

/// Top-level application error.
#[derive(Debug, Error)]
pub enum AppError {
    /// The index document could not be loaded.
    #[error("Failed to load index: {0}")]
    Index(#[from] IndexError),

    /// The configuration could not be loaded.
    #[error("Failed to load configuration: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Persisted view state could not be read or written.
    #[error("Persistence error: {0}")]
    Persist(#[from] crate::persist::PersistError),

    /// Index generation from a page directory failed.
    #[error("Failed to build index: {0}")]
    Build(#[from] crate::builder::BuildError),

    /// Tracing could not be initialized.
    #[error("Failed to initialize logging: {0}")]
    Logging(#[from] crate::logging::LoggingError),

    /// Terminal or TUI failure.
    #[error("Terminal error: {0}")]
    Tui(#[from] crate::view::TuiError),

    /// Writing command output failed.
    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors encountered while loading or validating an index document.
#[derive(Debug, Error)]
pub enum IndexError {
    /// The index file could not be read.
    #[error("Failed to read index file at {path}: {source}")]
    Read {
        /// Path that failed to read.
        path: PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid for its format.
    #[error("Invalid {format} index document: {reason}")]
    Parse {
        /// Document format name.
        format: &'static str,
        /// Parser error details.
        reason: String,
    },

    /// The file extension names no supported format.
    #[error("Unsupported index format for {0:?} (expected .toml or .json)")]
    UnsupportedFormat(PathBuf),

    /// Two sections share an id.
    #[error("Duplicate section id {0:?}")]
    DuplicateSectionId(String),

    /// A section id failed validation.
    #[error(transparent)]
    InvalidSectionId(#[from] InvalidSectionId),

    /// The index could not be serialized.
    #[error("Failed to serialize index: {0}")]
    Serialize(String),
}
