//! Configuration file loading with precedence handling.

use crate::persist::default_theme_path;
use crate::state::{StatusLabels, Theme, DEFAULT_SEARCH_SHORTCUT};
use serde::Deserialize;
use std::path::PathBuf;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur during config loading.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Failed to read config file (file may not exist or have permission issues).
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError {
        /// Path that failed to read.
        path: PathBuf,
        /// Reason for failure.
        reason: String,
    },

    /// Config file contains invalid TOML syntax or values.
    #[error("Invalid TOML in {path}: {reason}")]
    ParseError {
        /// Path with invalid TOML.
        path: PathBuf,
        /// Parse error details.
        reason: String,
    },
}

/// TOML configuration file structure.
///
/// All fields are optional - if not specified, hardcoded defaults are used.
/// Corresponds to `~/.config/knowdex/config.toml`.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Theme used when no theme has been saved yet ("light" or "dark").
    #[serde(default)]
    pub theme: Option<Theme>,

    /// Key that moves focus to the search input.
    #[serde(default)]
    pub search_shortcut: Option<char>,

    /// Status text when entries match; `{count}` is replaced by the count.
    #[serde(default)]
    pub found_template: Option<String>,

    /// Status text when nothing matches.
    #[serde(default)]
    pub not_found_text: Option<String>,

    /// Path to log file for tracing output.
    #[serde(default)]
    pub log_file_path: Option<PathBuf>,

    /// Path of the file remembering the chosen theme.
    #[serde(default)]
    pub theme_state_path: Option<PathBuf>,
}

/// Resolved configuration after applying precedence rules.
///
/// Created by merging defaults, config file, env vars, and CLI args.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedConfig {
    /// Initial theme when none is saved; `None` leaves it unset.
    pub theme: Option<Theme>,
    /// Focus-search shortcut key.
    pub search_shortcut: char,
    /// Status texts.
    pub labels: StatusLabels,
    /// Path to log file for tracing output.
    pub log_file_path: PathBuf,
    /// Path of the saved-theme file.
    pub theme_state_path: PathBuf,
}

impl Default for ResolvedConfig {
    fn default() -> Self {
        Self {
            theme: None,
            search_shortcut: DEFAULT_SEARCH_SHORTCUT,
            labels: StatusLabels::default(),
            log_file_path: default_log_path(),
            theme_state_path: default_theme_path(),
        }
    }
}

/// Resolve default log file path.
///
/// Returns `~/.local/state/knowdex/knowdex.log` on Unix-like systems,
/// or appropriate platform path on other systems.
///
/// If state directory cannot be determined, falls back to current directory.
pub fn default_log_path() -> PathBuf {
    if let Some(state_dir) = dirs::state_dir() {
        state_dir.join("knowdex").join("knowdex.log")
    } else {
        PathBuf::from("knowdex.log")
    }
}

/// Load configuration file from a specific path.
///
/// Returns `Ok(None)` if file doesn't exist (not an error - use defaults).
/// Returns `Err` if file exists but cannot be read or parsed.
///
/// # Errors
///
/// Returns error if file exists but has read or parse errors.
pub fn load_config_file(path: impl Into<PathBuf>) -> Result<Option<ConfigFile>, ConfigError> {
    let path = path.into();

    // Missing file is not an error - use defaults
    if !path.exists() {
        return Ok(None);
    }

    let contents = std::fs::read_to_string(&path).map_err(|e| ConfigError::ReadError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    let config: ConfigFile = toml::from_str(&contents).map_err(|e| ConfigError::ParseError {
        path: path.clone(),
        reason: e.to_string(),
    })?;

    Ok(Some(config))
}

/// Resolve default config file path.
///
/// Returns `~/.config/knowdex/config.toml` on Unix, appropriate path on other platforms.
/// Returns `None` if home directory cannot be determined.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("knowdex").join("config.toml"))
}

/// Load configuration with precedence handling.
///
/// Precedence (highest to lowest):
/// 1. Explicit `config_path` argument (CLI `--config`)
/// 2. `KNOWDEX_CONFIG` environment variable
/// 3. Default path `~/.config/knowdex/config.toml`
///
/// Missing config files are NOT errors - defaults are used.
///
/// # Errors
///
/// Returns error only if a config file exists but cannot be read or parsed.
pub fn load_config_with_precedence(
    config_path: Option<PathBuf>,
) -> Result<Option<ConfigFile>, ConfigError> {
    if let Some(path) = config_path {
        return load_config_file(path);
    }

    if let Ok(env_path) = std::env::var("KNOWDEX_CONFIG") {
        return load_config_file(PathBuf::from(env_path));
    }

    if let Some(default_path) = default_config_path() {
        return load_config_file(default_path);
    }

    Ok(None)
}

/// Merge config file into defaults to create resolved config.
///
/// For each field in `ConfigFile`, if `Some(value)`, use it; otherwise use default.
pub fn merge_config(config_file: Option<ConfigFile>) -> ResolvedConfig {
    let defaults = ResolvedConfig::default();

    let Some(config) = config_file else {
        return defaults;
    };

    ResolvedConfig {
        theme: config.theme.or(defaults.theme),
        search_shortcut: config.search_shortcut.unwrap_or(defaults.search_shortcut),
        labels: StatusLabels {
            found_template: config
                .found_template
                .unwrap_or(defaults.labels.found_template),
            not_found: config.not_found_text.unwrap_or(defaults.labels.not_found),
        },
        log_file_path: config.log_file_path.unwrap_or(defaults.log_file_path),
        theme_state_path: config.theme_state_path.unwrap_or(defaults.theme_state_path),
    }
}

/// Apply environment variable overrides to resolved config.
///
/// Checks for:
/// - `KNOWDEX_THEME`: Override the initial theme (ignored with a warning if unknown)
pub fn apply_env_overrides(mut config: ResolvedConfig) -> ResolvedConfig {
    if let Ok(raw) = std::env::var("KNOWDEX_THEME") {
        match raw.parse::<Theme>() {
            Ok(theme) => config.theme = Some(theme),
            Err(e) => warn!(error = %e, "Ignoring KNOWDEX_THEME"),
        }
    }

    config
}

/// Apply CLI argument overrides to resolved config.
///
/// CLI args have the highest precedence and override all other sources.
/// Only applies overrides for flags that were explicitly set by the user.
///
/// Precedence chain: Defaults → Config File → Env Vars → CLI Args (highest)
pub fn apply_cli_overrides(mut config: ResolvedConfig, theme_override: Option<Theme>) -> ResolvedConfig {
    if let Some(theme) = theme_override {
        config.theme = Some(theme);
    }

    config
}

#[cfg(test)]
#[path = "loader_tests.rs"]
mod tests;

#[cfg(test)]
mod log_path_tests {
    use super::*;

    #[test]
    fn default_log_path_ends_with_knowdex_log() {
        let path = default_log_path();
        assert!(
            path.to_string_lossy().ends_with("knowdex.log"),
            "Default log path should end with 'knowdex.log', got: {:?}",
            path
        );
    }

    #[test]
    fn resolved_config_default_includes_log_path() {
        let config = ResolvedConfig::default();
        assert!(
            !config.log_file_path.as_os_str().is_empty(),
            "Default config should have non-empty log_file_path"
        );
    }

    #[test]
    fn config_file_log_path_overrides_default() {
        let custom_path = PathBuf::from("/custom/path/to/app.log");
        let config_file = ConfigFile {
            log_file_path: Some(custom_path.clone()),
            ..ConfigFile::default()
        };

        let resolved = merge_config(Some(config_file));
        assert_eq!(
            resolved.log_file_path, custom_path,
            "Config file log_file_path should override default"
        );
    }

    #[test]
    fn missing_config_file_log_path_uses_default() {
        let resolved = merge_config(Some(ConfigFile::default()));
        assert_eq!(
            resolved.log_file_path,
            default_log_path(),
            "Missing log_file_path in config should use default"
        );
    }
}
