use super::defaults::DEFAULT_PROVIDER_ID;
use super::error::ConfigError;
use super::table::ProviderTable;
use std::path::Path;

/// Provider settings loaded from providers.toml (or built-in defaults)
#[derive(Debug, Clone, PartialEq)]
pub struct ProviderSettings {
    /// Provider used when the environment does not select one
    pub default_provider: String,
    pub table: ProviderTable,
    /// Send a trivial request to every specialized handle before using it
    pub probe_specialized: bool,
}

impl Default for ProviderSettings {
    fn default() -> Self {
        Self {
            default_provider: DEFAULT_PROVIDER_ID.to_string(),
            table: ProviderTable::gemini_only(),
            probe_specialized: false,
        }
    }
}

impl ProviderSettings {
    /// Load settings from a file path.
    ///
    /// An explicit path must exist. With `None` the default path is tried
    /// and built-in defaults are used when it is absent.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        super::loader::load_settings(path)
    }

    pub fn with_table(mut self, table: ProviderTable) -> Self {
        self.table = table;
        self
    }

    pub fn with_default_provider(mut self, provider: impl Into<String>) -> Self {
        self.default_provider = provider.into();
        self
    }

    pub fn with_probe(mut self, probe: bool) -> Self {
        self.probe_specialized = probe;
        self
    }
}
