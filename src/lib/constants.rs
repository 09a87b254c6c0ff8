//! Application constants
//!
//! Single source of truth for paths, environment keys and other constants.

/// Default provider configuration file path
pub const CONFIG_PATH: &str = "config/providers.toml";

/// Default environment file path
pub const ENV_PATH: &str = "config/.env";

/// Environment variable selecting the active provider
pub const PROVIDER_ENV_KEY: &str = "LLM_PROVIDER";

/// Default Gemini API path (fallback when not specified in config)
pub const DEFAULT_GEMINI_API_PATH: &str = "v1beta/models";

/// Default OpenAI-compatible chat completions path
pub const DEFAULT_OPENAI_API_PATH: &str = "/v1/chat/completions";

/// Prompt sent when probing a freshly built specialized handle
pub const PROBE_PROMPT: &str = "ping";
