use super::app::ProviderSettings;
use super::defaults::DEFAULT_PROVIDER_ID;
use super::error::ConfigError;
use super::provider::RawProviderConfig;
use super::table::ProviderTable;
use crate::constants::{CONFIG_PATH, ENV_PATH};
use dotenvy::from_filename;
use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use std::sync::Once;
use tracing::debug;

static ENV_LOADER: Once = Once::new();

/// Raw configuration structure for deserialization from TOML
#[derive(Debug, Deserialize, Default)]
pub(super) struct RawSettings {
    pub default_provider: Option<String>,
    #[serde(default)]
    pub probe_specialized: bool,
    #[serde(default)]
    pub providers: Vec<RawProviderConfig>,
}

/// Ensures environment variables are loaded from config/.env
pub fn ensure_env_loaded() {
    ENV_LOADER.call_once(|| {
        let _ = from_filename(ENV_PATH);
    });
}

/// Load and validate settings from a file path
pub fn load_settings(path: Option<&Path>) -> Result<ProviderSettings, ConfigError> {
    ensure_env_loaded();
    match path {
        Some(path) => read_settings(path),
        None => match read_settings(Path::new(CONFIG_PATH)) {
            Err(ConfigError::NotFound { path }) => {
                debug!(path = %path.display(), "No provider config file, using built-in defaults");
                Ok(ProviderSettings::default())
            }
            other => other,
        },
    }
}

fn read_settings(path: &Path) -> Result<ProviderSettings, ConfigError> {
    debug!(path = %path.display(), "Reading provider configuration file");

    let content = fs::read_to_string(path).map_err(|source| {
        if source.kind() == io::ErrorKind::NotFound {
            ConfigError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    })?;

    parse_settings(&content, path)
}

fn parse_settings(content: &str, path: &Path) -> Result<ProviderSettings, ConfigError> {
    let parsed: RawSettings = toml::from_str(content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })?;
    validate_and_build(parsed)
}

fn validate_and_build(parsed: RawSettings) -> Result<ProviderSettings, ConfigError> {
    let default_provider = parsed
        .default_provider
        .unwrap_or_else(|| DEFAULT_PROVIDER_ID.to_string());

    // An empty provider list keeps the built-in table so a file can carry
    // just `default_provider` or `probe_specialized`.
    let table = if parsed.providers.is_empty() {
        ProviderTable::gemini_only()
    } else {
        let mut table = ProviderTable::default();
        for raw_provider in parsed.providers {
            let (kind, profile) = raw_provider.into_profile()?;
            debug!(
                provider = %kind,
                model = profile.default_model.as_str(),
                "Registered provider profile"
            );
            table.insert(kind, profile);
        }
        table
    };

    Ok(ProviderSettings {
        default_provider,
        table,
        probe_specialized: parsed.probe_specialized,
    })
}
