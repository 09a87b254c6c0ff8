use super::provider::{ConnectionConfig, GenerationOptions, ProviderKind, ThinkingOptions};
use crate::constants::{DEFAULT_GEMINI_API_PATH, DEFAULT_OPENAI_API_PATH};

pub const DEFAULT_PROVIDER_ID: &str = "gemini";
pub const DEFAULT_TEMPERATURE: f32 = 1.0;

pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_OPENAI_ENDPOINT: &str = "https://api.openai.com";
pub const GEMINI_API_KEY_ENV: &str = "GEMINI_API_KEY";
pub const OPENAI_API_KEY_ENV: &str = "OPENAI_API_KEY";

pub const GEMINI_DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const GEMINI_SPECIALIZED_MODEL: &str = "gemini-2.5-pro";
pub const GEMINI_TEMPERATURE: f32 = 0.3;

pub const LEGACY_GEMINI_DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const LEGACY_GEMINI_SPECIALIZED_MODEL: &str = "gemini-1.5-pro";
pub const OPENAI_DEFAULT_MODEL: &str = "gpt-4-turbo-preview";
pub const OPENAI_SPECIALIZED_MODEL: &str = "gpt-4o";

/// Built-in connection parameters for a provider family.
pub fn builtin_connection(kind: ProviderKind) -> ConnectionConfig {
    match kind {
        ProviderKind::Gemini => ConnectionConfig {
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            api_key_env: GEMINI_API_KEY_ENV.to_string(),
            api_path: Some(DEFAULT_GEMINI_API_PATH.to_string()),
        },
        ProviderKind::OpenAI => ConnectionConfig {
            endpoint: DEFAULT_OPENAI_ENDPOINT.to_string(),
            api_key_env: OPENAI_API_KEY_ENV.to_string(),
            api_path: Some(DEFAULT_OPENAI_API_PATH.to_string()),
        },
    }
}

/// Gemini generation options with thoughts included in responses.
pub fn gemini_thinking_options() -> GenerationOptions {
    GenerationOptions::with_temperature(GEMINI_TEMPERATURE).with_thinking(ThinkingOptions {
        include_thoughts: true,
        budget_tokens: None,
    })
}
