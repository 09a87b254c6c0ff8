//! Where the active provider identifier comes from

use crate::config::loader::ensure_env_loaded;
use crate::constants::PROVIDER_ENV_KEY;
use std::env;

/// Configuration source consulted on every handle request to pick the
/// active provider. `None` means "use the configured default".
pub trait ProviderSource: Send + Sync {
    fn provider_id(&self) -> Option<String>;
}

/// Reads the provider from an environment variable (`LLM_PROVIDER` by
/// default). Unset or blank counts as absent.
#[derive(Debug, Clone)]
pub struct EnvProviderSource {
    key: String,
}

impl EnvProviderSource {
    pub fn new() -> Self {
        Self::with_key(PROVIDER_ENV_KEY)
    }

    pub fn with_key(key: impl Into<String>) -> Self {
        ensure_env_loaded();
        Self { key: key.into() }
    }
}

impl Default for EnvProviderSource {
    fn default() -> Self {
        Self::new()
    }
}

impl ProviderSource for EnvProviderSource {
    fn provider_id(&self) -> Option<String> {
        env::var(&self.key)
            .ok()
            .map(|value| value.trim().to_string())
            .filter(|value| !value.is_empty())
    }
}

/// Fixed provider selection, for embedding and tests.
#[derive(Debug, Clone, Default)]
pub struct StaticProviderSource(Option<String>);

impl StaticProviderSource {
    pub fn new(provider: impl Into<String>) -> Self {
        Self(Some(provider.into()))
    }

    pub fn unset() -> Self {
        Self(None)
    }
}

impl ProviderSource for StaticProviderSource {
    fn provider_id(&self) -> Option<String> {
        self.0.clone()
    }
}
