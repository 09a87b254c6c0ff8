//! Client factory - builds HTTP-backed handles from a [`ClientSpec`]

use super::clients::{GeminiClient, HttpClientBase, OpenAIClient};
use super::traits::{ClientFactory, ClientSpec, ModelHandle};
use super::types::ModelError;
use crate::config::ProviderKind;
use reqwest::Client;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, warn};

/// Resolve API key from the named environment variable.
pub fn resolve_api_key(provider: &str, env_var: &str) -> Option<String> {
    let raw = env_var.trim();
    if raw.is_empty() {
        return None;
    }
    match env::var(raw) {
        Ok(value) if !value.trim().is_empty() => Some(value),
        Ok(_) => {
            warn!(provider, env_var = raw, "API key environment variable is empty");
            None
        }
        Err(err) => {
            warn!(
                provider,
                env_var = raw,
                %err,
                "API key environment variable is not set"
            );
            None
        }
    }
}

/// Factory for HTTP model clients.
///
/// Construction fails when the provider's API key is missing or the
/// underlying HTTP client cannot be built; nothing is sent over the network.
#[derive(Debug, Clone, Default)]
pub struct HttpClientFactory {
    timeout: Option<Duration>,
}

impl HttpClientFactory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Per-request timeout applied to every client this factory builds
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    fn build_http(&self, spec: &ClientSpec) -> Result<Client, ModelError> {
        let mut builder = Client::builder();
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }
        builder
            .build()
            .map_err(|e| ModelError::construction(spec.provider.as_str(), &spec.model, e.to_string()))
    }
}

impl ClientFactory for HttpClientFactory {
    fn create(&self, spec: &ClientSpec) -> Result<ModelHandle, ModelError> {
        let provider = spec.provider.as_str();
        let api_key = resolve_api_key(provider, &spec.connection.api_key_env)
            .ok_or_else(|| ModelError::missing_api_key(provider, &spec.connection.api_key_env))?;

        let base = HttpClientBase::new(
            provider.to_string(),
            spec.connection.endpoint.clone(),
            api_key,
            self.build_http(spec)?,
        );
        let api_path = spec.connection.api_path.clone();
        let model = spec.model.clone();
        let options = spec.options.clone();

        debug!(provider, model = model.as_str(), "Building HTTP model client");
        let handle: ModelHandle = match spec.provider {
            ProviderKind::Gemini => Arc::new(GeminiClient::new(base, api_path, model, options)),
            ProviderKind::OpenAI => Arc::new(OpenAIClient::new(base, api_path, model, options)),
        };
        Ok(handle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ConnectionConfig, GenerationOptions};

    fn spec(api_key_env: &str) -> ClientSpec {
        ClientSpec {
            provider: ProviderKind::Gemini,
            model: "gemini-2.5-flash".into(),
            options: GenerationOptions::with_temperature(0.3),
            connection: ConnectionConfig {
                endpoint: "https://example.com".into(),
                api_key_env: api_key_env.into(),
                api_path: None,
            },
        }
    }

    #[test]
    fn blank_env_var_name_resolves_nothing() {
        assert_eq!(resolve_api_key("gemini", "  "), None);
    }

    #[test]
    fn missing_key_fails_construction() {
        let err = match HttpClientFactory::new().create(&spec("LLM_HANDLES_TEST_UNSET_KEY")) {
            Err(err) => err,
            Ok(_) => panic!("construction should fail without a key"),
        };
        assert!(matches!(
            err,
            ModelError::MissingApiKey { ref env_var, .. } if env_var == "LLM_HANDLES_TEST_UNSET_KEY"
        ));
    }

    #[test]
    fn builds_client_for_present_key() {
        // PATH is always set, so it stands in for an API key here.
        let handle = HttpClientFactory::new()
            .with_timeout(Duration::from_secs(5))
            .create(&spec("PATH"))
            .expect("client");
        assert_eq!(handle.provider(), ProviderKind::Gemini);
        assert_eq!(handle.model(), "gemini-2.5-flash");
        assert_eq!(handle.options().temperature, 0.3);
    }
}
