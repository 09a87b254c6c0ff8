//! Provider → profile lookup table

use super::defaults::{
    GEMINI_DEFAULT_MODEL, GEMINI_SPECIALIZED_MODEL, LEGACY_GEMINI_DEFAULT_MODEL,
    LEGACY_GEMINI_SPECIALIZED_MODEL, OPENAI_DEFAULT_MODEL, OPENAI_SPECIALIZED_MODEL,
    builtin_connection, gemini_thinking_options,
};
use super::error::ConfigError;
use super::provider::{GenerationOptions, ProviderKind, ProviderProfile};
use std::collections::HashMap;

/// Static mapping from provider family to the models and generation options
/// its handles are built with.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProviderTable {
    profiles: HashMap<ProviderKind, ProviderProfile>,
}

impl ProviderTable {
    /// Gemini only: `gemini-2.5-flash` by default, `gemini-2.5-pro` for
    /// specialized work, temperature 0.3 with thoughts included.
    pub fn gemini_only() -> Self {
        Self::default().with_profile(
            ProviderKind::Gemini,
            ProviderProfile {
                default_model: GEMINI_DEFAULT_MODEL.to_string(),
                specialized_model: GEMINI_SPECIALIZED_MODEL.to_string(),
                options: gemini_thinking_options(),
                connection: builtin_connection(ProviderKind::Gemini),
            },
        )
    }

    /// OpenAI and Gemini side by side, both at temperature 1.
    pub fn multi_provider() -> Self {
        Self::default()
            .with_profile(
                ProviderKind::OpenAI,
                ProviderProfile {
                    default_model: OPENAI_DEFAULT_MODEL.to_string(),
                    specialized_model: OPENAI_SPECIALIZED_MODEL.to_string(),
                    options: GenerationOptions::with_temperature(1.0),
                    connection: builtin_connection(ProviderKind::OpenAI),
                },
            )
            .with_profile(
                ProviderKind::Gemini,
                ProviderProfile {
                    default_model: LEGACY_GEMINI_DEFAULT_MODEL.to_string(),
                    specialized_model: LEGACY_GEMINI_SPECIALIZED_MODEL.to_string(),
                    options: GenerationOptions::with_temperature(1.0),
                    connection: builtin_connection(ProviderKind::Gemini),
                },
            )
    }

    pub fn with_profile(mut self, kind: ProviderKind, profile: ProviderProfile) -> Self {
        self.insert(kind, profile);
        self
    }

    pub fn insert(&mut self, kind: ProviderKind, profile: ProviderProfile) {
        self.profiles.insert(kind, profile);
    }

    /// Look up the profile for a provider.
    pub fn profile(&self, kind: ProviderKind) -> Result<&ProviderProfile, ConfigError> {
        self.profiles
            .get(&kind)
            .ok_or_else(|| ConfigError::MissingProfile {
                provider: kind.to_string(),
            })
    }

    pub fn contains(&self, kind: ProviderKind) -> bool {
        self.profiles.contains_key(&kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gemini_only_has_no_openai_entry() {
        let table = ProviderTable::gemini_only();
        assert!(table.contains(ProviderKind::Gemini));
        assert!(matches!(
            table.profile(ProviderKind::OpenAI),
            Err(ConfigError::MissingProfile { ref provider }) if provider == "openai"
        ));
    }

    #[test]
    fn gemini_only_includes_thoughts() {
        let table = ProviderTable::gemini_only();
        let profile = table.profile(ProviderKind::Gemini).unwrap();
        assert_eq!(profile.default_model, "gemini-2.5-flash");
        assert_eq!(profile.specialized_model, "gemini-2.5-pro");
        assert_eq!(profile.options.temperature, 0.3);
        assert!(profile.options.thinking.as_ref().unwrap().include_thoughts);
    }

    #[test]
    fn multi_provider_defaults() {
        let table = ProviderTable::multi_provider();
        let openai = table.profile(ProviderKind::OpenAI).unwrap();
        assert_eq!(openai.default_model, "gpt-4-turbo-preview");
        assert_eq!(openai.options, GenerationOptions::with_temperature(1.0));

        let gemini = table.profile(ProviderKind::Gemini).unwrap();
        assert_eq!(gemini.default_model, "gemini-1.5-flash");
        assert!(gemini.options.thinking.is_none());
    }
}
