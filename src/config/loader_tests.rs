//! Tests for configuration file loading.

use super::*;
use serial_test::serial;
use std::env;
use std::fs;

fn temp_config(name: &str, contents: &str) -> PathBuf {
    let dir = env::temp_dir().join("knowdex_test_config");
    fs::create_dir_all(&dir).expect("Failed to create temp dir");
    let path = dir.join(name);
    fs::write(&path, contents).expect("Failed to write config");
    path
}

#[test]
fn default_config_path_contains_knowdex_config_toml() {
    let Some(path) = default_config_path() else {
        return;
    };
    let path_str = path.to_string_lossy();
    assert!(
        path_str.contains("knowdex") && path_str.ends_with("config.toml"),
        "Path should contain 'knowdex' and end with 'config.toml', got: {}",
        path_str
    );
}

#[test]
fn load_config_file_returns_ok_none_for_missing_file() {
    let result = load_config_file("/nonexistent/path/to/config.toml");
    assert_eq!(
        result,
        Ok(None),
        "Missing config file should return Ok(None), not an error"
    );
}

#[test]
fn load_config_file_parses_valid_toml() {
    let path = temp_config(
        "valid.toml",
        r#"
theme = "light"
search_shortcut = "s"
found_template = "{count} hits"
not_found_text = "nothing"
theme_state_path = "/tmp/knowdex-theme"
"#,
    );

    let config = load_config_file(&path)
        .expect("Should parse")
        .expect("File exists");

    assert_eq!(config.theme, Some(Theme::Light));
    assert_eq!(config.search_shortcut, Some('s'));
    assert_eq!(config.found_template.as_deref(), Some("{count} hits"));
    assert_eq!(config.not_found_text.as_deref(), Some("nothing"));
    assert_eq!(
        config.theme_state_path,
        Some(PathBuf::from("/tmp/knowdex-theme"))
    );
    assert_eq!(config.log_file_path, None);

    fs::remove_file(path).ok();
}

#[test]
fn load_config_file_reports_parse_error_with_path() {
    let path = temp_config("invalid.toml", "theme = [unclosed");

    let result = load_config_file(&path);
    assert!(
        matches!(&result, Err(ConfigError::ParseError { path: p, .. }) if *p == path),
        "Invalid TOML should be a ParseError naming the file, got {result:?}"
    );

    fs::remove_file(path).ok();
}

#[test]
fn unknown_theme_in_file_is_a_parse_error() {
    let path = temp_config("bad_theme.toml", r#"theme = "purple""#);
    assert!(matches!(
        load_config_file(&path),
        Err(ConfigError::ParseError { .. })
    ));
    fs::remove_file(path).ok();
}

#[test]
fn config_file_rejects_unknown_fields() {
    let toml_with_unknown = r#"
theme = "dark"
unknown_field = "should fail"
"#;

    let result: Result<ConfigFile, _> = toml::from_str(toml_with_unknown);
    assert!(
        result.is_err(),
        "Should reject TOML with unknown fields due to deny_unknown_fields"
    );
}

#[test]
fn merge_config_uses_defaults_when_none() {
    assert_eq!(merge_config(None), ResolvedConfig::default());
}

#[test]
fn resolved_config_default_has_expected_values() {
    let config = ResolvedConfig::default();

    assert_eq!(config.theme, None);
    assert_eq!(config.search_shortcut, '/');
    assert_eq!(config.labels.found_template, "{count} found");
    assert_eq!(config.labels.not_found, "not found");
}

#[test]
fn merge_config_overrides_with_config_file_values() {
    let config_file = ConfigFile {
        theme: Some(Theme::Dark),
        search_shortcut: Some('f'),
        found_template: Some("{count} Treffer".to_string()),
        not_found_text: Some("keine Treffer".to_string()),
        log_file_path: None,
        theme_state_path: None,
    };

    let resolved = merge_config(Some(config_file));

    assert_eq!(resolved.theme, Some(Theme::Dark));
    assert_eq!(resolved.search_shortcut, 'f');
    assert_eq!(resolved.labels.found_template, "{count} Treffer");
    assert_eq!(resolved.labels.not_found, "keine Treffer");
    assert_eq!(resolved.theme_state_path, ResolvedConfig::default().theme_state_path);
}

/// RAII guard to ensure environment variable cleanup even under test parallelism.
/// Removes the var on drop, preventing test pollution in parallel execution.
struct EnvGuard(&'static str);

impl EnvGuard {
    fn new(name: &'static str) -> Self {
        env::remove_var(name);
        EnvGuard(name)
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        env::remove_var(self.0);
    }
}

#[test]
#[serial(knowdex_theme)]
fn apply_env_overrides_respects_knowdex_theme() {
    let _guard = EnvGuard::new("KNOWDEX_THEME");
    env::set_var("KNOWDEX_THEME", "light");

    let result = apply_env_overrides(ResolvedConfig::default());

    assert_eq!(result.theme, Some(Theme::Light));
}

#[test]
#[serial(knowdex_theme)]
fn apply_env_overrides_ignores_unknown_theme() {
    let _guard = EnvGuard::new("KNOWDEX_THEME");
    env::set_var("KNOWDEX_THEME", "solarized");

    let base = ResolvedConfig {
        theme: Some(Theme::Dark),
        ..ResolvedConfig::default()
    };
    let result = apply_env_overrides(base.clone());

    assert_eq!(result, base, "Unknown theme names leave config unchanged");
}

#[test]
#[serial(knowdex_theme)]
fn apply_env_overrides_no_change_when_env_var_not_set() {
    let _guard = EnvGuard::new("KNOWDEX_THEME");

    let base = ResolvedConfig::default();
    let result = apply_env_overrides(base.clone());

    assert_eq!(
        result, base,
        "Config should be unchanged when KNOWDEX_THEME not set"
    );
}

#[test]
fn apply_cli_overrides_wins_over_everything() {
    let base = ResolvedConfig {
        theme: Some(Theme::Light),
        ..ResolvedConfig::default()
    };

    assert_eq!(
        apply_cli_overrides(base.clone(), Some(Theme::Dark)).theme,
        Some(Theme::Dark)
    );
    assert_eq!(apply_cli_overrides(base.clone(), None), base);
}

#[test]
#[serial(knowdex_config)]
fn load_config_with_precedence_prefers_explicit_path() {
    let _guard = EnvGuard::new("KNOWDEX_CONFIG");

    let explicit_path = temp_config("explicit.toml", r#"theme = "light""#);
    let env_path = temp_config("env.toml", r#"theme = "dark""#);
    env::set_var("KNOWDEX_CONFIG", &env_path);

    let config = load_config_with_precedence(Some(explicit_path.clone()))
        .expect("Should load")
        .expect("File exists");
    assert_eq!(
        config.theme,
        Some(Theme::Light),
        "Should use explicit path, not KNOWDEX_CONFIG env var"
    );

    fs::remove_file(explicit_path).ok();
    fs::remove_file(env_path).ok();
}

#[test]
#[serial(knowdex_config)]
fn load_config_with_precedence_uses_env_var_when_no_explicit_path() {
    let _guard = EnvGuard::new("KNOWDEX_CONFIG");

    let env_path = temp_config("env_only.toml", r#"not_found_text = "nada""#);
    env::set_var("KNOWDEX_CONFIG", &env_path);

    let config = load_config_with_precedence(None)
        .expect("Should load")
        .expect("File exists");
    assert_eq!(config.not_found_text.as_deref(), Some("nada"));

    fs::remove_file(env_path).ok();
}

#[test]
#[serial(knowdex_config)]
fn load_config_with_precedence_env_var_pointing_nowhere_is_not_an_error() {
    let _guard = EnvGuard::new("KNOWDEX_CONFIG");
    env::set_var("KNOWDEX_CONFIG", "/nonexistent/knowdex/config.toml");

    assert_eq!(load_config_with_precedence(None), Ok(None));
}
