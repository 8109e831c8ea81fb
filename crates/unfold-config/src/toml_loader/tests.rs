//! Tests for TOML config loading, creation, and path resolution.

use super::*;
use std::path::Path;
use unfold_common::ConfigError;

#[test]
fn load_from_nonexistent_returns_file_not_found() {
    let result = load_from_path(Path::new("/tmp/nonexistent_unfold_tutor_config.toml"));
    assert!(matches!(result, Err(ConfigError::FileNotFound(_))));
}

#[test]
fn load_valid_partial_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[tutor]
model = "gemini-2.5-flash"
max_output_tokens = 4096

[logging]
level = "debug"
"#,
    )
    .unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.tutor.model, "gemini-2.5-flash");
    assert_eq!(config.tutor.max_output_tokens, Some(4096));
    assert_eq!(config.logging.level, crate::schema::LogLevel::Debug);
    // Defaults preserved
    assert_eq!(config.tutor.temperature, 0.7);
    assert_eq!(config.provider.request_timeout_secs, 120);
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "this is not valid toml {{{").unwrap();

    let result = load_from_path(&path);
    assert!(matches!(result, Err(ConfigError::ParseError(_))));
}

#[test]
fn load_out_of_range_values_is_validation_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[tutor]\ntemperature = 9.0\n").unwrap();

    let result = load_from_path(&path);
    match result {
        Err(ConfigError::ValidationError(msg)) => assert!(msg.contains("tutor.temperature")),
        other => panic!("expected validation error, got {other:?}"),
    }
}

#[test]
fn relative_instructions_file_resolves_next_to_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[tutor]\ninstructions_file = \"persona.md\"\n").unwrap();

    let config = load_from_path(&path).unwrap();
    assert_eq!(
        config.tutor.instructions_file.as_deref(),
        Some(dir.path().join("persona.md").as_path())
    );
}

#[test]
fn default_template_parses_to_defaults() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    create_default_config(&path).unwrap();
    assert!(path.exists());

    let config = load_from_path(&path).unwrap();
    assert_eq!(config.tutor.model, "gemini-3-pro-preview");
    assert_eq!(config.provider.api_key_env, vec!["GEMINI_API_KEY", "API_KEY"]);
}

#[test]
fn default_config_path_ends_with_app_dir() {
    if let Ok(path) = default_config_path() {
        assert!(path.ends_with("unfold-tutor/config.toml"));
    }
}
