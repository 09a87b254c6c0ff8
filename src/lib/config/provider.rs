//! # Provider Configuration
//!
//! This module defines the configuration types for the model backends a
//! handle can be built against.
//!
//! ## Provider Types
//!
//! | Type | Description | API Key Required |
//! |------|-------------|-----------------|
//! | `gemini` | Google Gemini API | Yes |
//! | `openai` | OpenAI-compatible APIs | Yes |

use super::error::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::str::FromStr;

/// Backend family a handle is built against.
///
/// The set is closed: every place that dispatches on a provider matches
/// exhaustively, so adding a family is a compile-time change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderKind {
    OpenAI,
    Gemini,
}

impl ProviderKind {
    pub const ALL: [ProviderKind; 2] = [ProviderKind::OpenAI, ProviderKind::Gemini];

    pub fn as_str(self) -> &'static str {
        match self {
            ProviderKind::OpenAI => "openai",
            ProviderKind::Gemini => "gemini",
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProviderKind {
    type Err = ConfigError;

    /// Parses a provider identifier (case-insensitive, surrounding
    /// whitespace ignored).
    ///
    /// # Examples
    ///
    /// ```
    /// use llm_handles::config::ProviderKind;
    ///
    /// assert_eq!("GEMINI".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
    /// assert_eq!("google".parse::<ProviderKind>().unwrap(), ProviderKind::Gemini);
    /// assert!("unsupported".parse::<ProviderKind>().is_err());
    /// ```
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "openai" => Ok(ProviderKind::OpenAI),
            "gemini" | "google" | "google-ai" => Ok(ProviderKind::Gemini),
            _ => Err(ConfigError::UnsupportedProvider {
                provider: value.to_string(),
            }),
        }
    }
}

/// Optional extended-reasoning settings.
#[derive(Debug, Clone, PartialEq)]
pub struct ThinkingOptions {
    /// Ask the backend to return its reasoning alongside the answer
    pub include_thoughts: bool,
    /// Token budget for reasoning; backend default when unset
    pub budget_tokens: Option<u32>,
}

/// Generation-time parameters applied to every handle of a provider family.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationOptions {
    pub temperature: f32,
    pub thinking: Option<ThinkingOptions>,
}

impl GenerationOptions {
    pub fn with_temperature(temperature: f32) -> Self {
        Self {
            temperature,
            thinking: None,
        }
    }

    pub fn with_thinking(mut self, thinking: ThinkingOptions) -> Self {
        self.thinking = Some(thinking);
        self
    }
}

/// Where and how to reach a provider. Credentials are never stored here,
/// only the name of the environment variable that holds them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectionConfig {
    pub endpoint: String,
    /// Environment variable holding the API key (e.g. `GEMINI_API_KEY`)
    pub api_key_env: String,
    /// Custom API path override (e.g. "v1beta/models" for Gemini)
    pub api_path: Option<String>,
}

/// Everything needed to build handles for one provider family.
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderProfile {
    /// Model used by the primary handle when the caller gives none
    pub default_model: String,
    /// High-capability model used by the specialized handle
    pub specialized_model: String,
    pub options: GenerationOptions,
    pub connection: ConnectionConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct RawProviderConfig {
    #[serde(rename = "type")]
    pub(super) provider_type: String,
    pub(super) default_model: Option<String>,
    pub(super) specialized_model: Option<String>,
    pub(super) endpoint: Option<String>,
    pub(super) api_key: Option<String>,
    #[serde(default)]
    pub(super) api_path: Option<String>,
    pub(super) temperature: Option<f32>,
    #[serde(default)]
    pub(super) include_thoughts: Option<bool>,
    #[serde(default)]
    pub(super) thinking_budget: Option<u32>,
}

impl RawProviderConfig {
    /// Validate the raw entry and fill unset fields from the provider's
    /// built-in defaults.
    pub(super) fn into_profile(self) -> Result<(ProviderKind, ProviderProfile), ConfigError> {
        let kind: ProviderKind = self.provider_type.parse()?;
        let builtin = super::defaults::builtin_connection(kind);

        let default_model = self.default_model.ok_or(ConfigError::MissingField {
            provider: kind.to_string(),
            field: "default_model",
        })?;
        let specialized_model = self.specialized_model.ok_or(ConfigError::MissingField {
            provider: kind.to_string(),
            field: "specialized_model",
        })?;

        let temperature = self
            .temperature
            .unwrap_or(super::defaults::DEFAULT_TEMPERATURE);
        if !(0.0..=2.0).contains(&temperature) {
            return Err(ConfigError::InvalidTemperature {
                provider: kind.to_string(),
                value: temperature,
            });
        }

        let mut options = GenerationOptions::with_temperature(temperature);
        if self.include_thoughts.is_some() || self.thinking_budget.is_some() {
            options = options.with_thinking(ThinkingOptions {
                include_thoughts: self.include_thoughts.unwrap_or(true),
                budget_tokens: self.thinking_budget,
            });
        }

        let connection = ConnectionConfig {
            endpoint: self.endpoint.unwrap_or(builtin.endpoint),
            api_key_env: self.api_key.unwrap_or(builtin.api_key_env),
            api_path: self.api_path.or(builtin.api_path),
        };

        Ok((
            kind,
            ProviderProfile {
                default_model,
                specialized_model,
                options,
                connection,
            },
        ))
    }
}
