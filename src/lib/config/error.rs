use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur when resolving or loading provider configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("unsupported provider '{provider}'")]
    UnsupportedProvider { provider: String },

    #[error("provider '{provider}' has no default model configured")]
    MissingProfile { provider: String },

    #[error("configuration file not found at {path:?}")]
    NotFound { path: PathBuf },

    #[error("failed to read config from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("failed to parse config from {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("provider '{provider}' is missing required field '{field}'")]
    MissingField {
        provider: String,
        field: &'static str,
    },

    #[error("provider '{provider}' has temperature {value} outside 0.0..=2.0")]
    InvalidTemperature { provider: String, value: f32 },
}
