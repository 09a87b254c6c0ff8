// Config loading tests - ProviderSettings::load from providers.toml
//
// Tests focused on file handling, validation errors and the resulting table.

use llm_handles::config::{ConfigError, ProviderKind, ProviderSettings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join("providers.toml");
    fs::write(&path, content).expect("Failed to write providers.toml");
    path
}

#[test]
fn returns_error_when_explicit_file_not_found() {
    let result = ProviderSettings::load(Some(Path::new("/nonexistent/path/providers.toml")));
    assert!(matches!(result, Err(ConfigError::NotFound { .. })));
}

#[test]
fn returns_parse_error_for_invalid_toml() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "default_provider = [unterminated");

    let result = ProviderSettings::load(Some(&path));
    assert!(matches!(result, Err(ConfigError::Parse { .. })));
}

#[test]
fn parses_full_two_provider_config() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
default_provider = "openai"
probe_specialized = true

[[providers]]
type = "openai"
default_model = "gpt-4-turbo-preview"
specialized_model = "gpt-4o"
endpoint = "https://llm.internal.example"
api_key = "TEAM_OPENAI_KEY"
temperature = 1.0

[[providers]]
type = "Gemini"
default_model = "gemini-2.5-flash"
specialized_model = "gemini-2.5-pro"
temperature = 0.3
include_thoughts = true
"#,
    );

    let settings = ProviderSettings::load(Some(&path)).expect("load settings");
    assert_eq!(settings.default_provider, "openai");
    assert!(settings.probe_specialized);

    let openai = settings.table.profile(ProviderKind::OpenAI).unwrap();
    assert_eq!(openai.connection.endpoint, "https://llm.internal.example");
    assert_eq!(openai.connection.api_key_env, "TEAM_OPENAI_KEY");
    assert!(openai.options.thinking.is_none());

    let gemini = settings.table.profile(ProviderKind::Gemini).unwrap();
    assert_eq!(gemini.specialized_model, "gemini-2.5-pro");
    assert_eq!(gemini.options.temperature, 0.3);
    assert!(gemini.options.thinking.as_ref().unwrap().include_thoughts);
    assert_eq!(gemini.connection.api_path.as_deref(), Some("v1beta/models"));
}

#[test]
fn returns_error_when_default_model_missing() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[[providers]]
type = "gemini"
specialized_model = "gemini-2.5-pro"
"#,
    );

    let result = ProviderSettings::load(Some(&path));
    assert!(matches!(
        result,
        Err(ConfigError::MissingField { field: "default_model", .. })
    ));
}

#[test]
fn returns_error_for_unknown_provider_type() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(
        dir.path(),
        r#"
[[providers]]
type = "ollama"
default_model = "llama3"
specialized_model = "llama3:70b"
"#,
    );

    let result = ProviderSettings::load(Some(&path));
    assert!(matches!(
        result,
        Err(ConfigError::UnsupportedProvider { ref provider }) if provider == "ollama"
    ));
}

#[test]
fn settings_only_file_keeps_builtin_table() {
    let dir = tempdir().expect("tempdir");
    let path = write_config(dir.path(), "probe_specialized = true\n");

    let settings = ProviderSettings::load(Some(&path)).expect("load settings");
    assert!(settings.probe_specialized);
    assert_eq!(settings.default_provider, "gemini");
    assert!(settings.table.contains(ProviderKind::Gemini));
}
