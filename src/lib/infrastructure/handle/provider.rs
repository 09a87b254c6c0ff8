//! Primary handle cache and specialized handle construction

use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, warn};

use super::error::{HandleError, SpecializedFailure};
use super::source::{EnvProviderSource, ProviderSource};
use crate::config::{ConfigError, ProviderKind, ProviderSettings};
use crate::constants::PROBE_PROMPT;
use crate::infrastructure::model::{
    ClientFactory, ClientSpec, HttpClientFactory, ModelHandle, ModelRequest,
};

/// Identifies what the cached primary handle was built with.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct HandleTag {
    pub provider: ProviderKind,
    pub model: String,
}

impl fmt::Display for HandleTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.provider, self.model)
    }
}

struct CachedHandle {
    tag: HandleTag,
    handle: ModelHandle,
}

enum ModelChoice<'a> {
    Primary(Option<&'a str>),
    Specialized,
}

/// Hands out configured model handles.
///
/// Holds at most one primary handle. A request whose resolved
/// (provider, model) matches the cached tag gets the same `Arc` back; any
/// other request rebuilds the handle and replaces the slot. Specialized
/// handles are built fresh on every request and never enter the slot.
///
/// Methods take `&mut self` and nothing is locked internally. Share one
/// instance between tasks by wrapping it in a mutex.
pub struct ModelProvider {
    factory: Arc<dyn ClientFactory>,
    source: Box<dyn ProviderSource>,
    settings: ProviderSettings,
    cached: Option<CachedHandle>,
}

impl ModelProvider {
    pub fn new(
        factory: impl ClientFactory + 'static,
        source: impl ProviderSource + 'static,
        settings: ProviderSettings,
    ) -> Self {
        Self {
            factory: Arc::new(factory),
            source: Box::new(source),
            settings,
            cached: None,
        }
    }

    /// HTTP clients, provider chosen by `LLM_PROVIDER`.
    pub fn from_env(settings: ProviderSettings) -> Self {
        Self::new(HttpClientFactory::new(), EnvProviderSource::new(), settings)
    }

    pub fn settings(&self) -> &ProviderSettings {
        &self.settings
    }

    /// Tag of the cached primary handle, if any.
    pub fn cached_tag(&self) -> Option<&HandleTag> {
        self.cached.as_ref().map(|cached| &cached.tag)
    }

    /// Drop the cached primary handle.
    pub fn reset(&mut self) {
        if let Some(cached) = self.cached.take() {
            debug!(tag = %cached.tag, "Cleared cached primary handle");
        }
    }

    /// Primary handle for `model`, or for the provider's default model when
    /// `None`.
    ///
    /// Configuration and construction errors propagate. A failed build
    /// leaves the cached handle untouched.
    pub fn primary_handle(&mut self, model: Option<&str>) -> Result<ModelHandle, HandleError> {
        let spec = self.client_spec(ModelChoice::Primary(model))?;
        let tag = HandleTag {
            provider: spec.provider,
            model: spec.model.clone(),
        };

        if let Some(cached) = &self.cached {
            if cached.tag == tag {
                debug!(tag = %tag, "Reusing cached primary handle");
                return Ok(Arc::clone(&cached.handle));
            }
        }

        info!(
            provider = %spec.provider,
            model = spec.model.as_str(),
            temperature = spec.options.temperature,
            "Building primary model handle"
        );
        let handle = self.factory.create(&spec)?;

        if let Some(previous) = self.cached.replace(CachedHandle {
            tag,
            handle: Arc::clone(&handle),
        }) {
            debug!(tag = %previous.tag, "Replaced cached primary handle");
        }
        Ok(handle)
    }

    /// Fresh handle on the provider's high-capability model.
    ///
    /// If it cannot be built (or, with probing enabled, does not answer a
    /// trivial request) a warning is logged and the default primary handle
    /// is returned instead. Only configuration errors and a failing
    /// fallback reach the caller.
    pub async fn specialized_handle(&mut self) -> Result<ModelHandle, HandleError> {
        let spec = self.client_spec(ModelChoice::Specialized)?;

        let attempt = self.attempt_specialized(&spec).await;
        match attempt {
            Ok(handle) => Ok(handle),
            Err(failure) => {
                warn!(
                    provider = %spec.provider,
                    model = spec.model.as_str(),
                    error = %failure,
                    "Specialized model unavailable, falling back to the default primary handle"
                );
                self.primary_handle(None)
            }
        }
    }

    async fn attempt_specialized(
        &self,
        spec: &ClientSpec,
    ) -> Result<ModelHandle, SpecializedFailure> {
        info!(
            provider = %spec.provider,
            model = spec.model.as_str(),
            "Building specialized model handle"
        );
        let handle = self
            .factory
            .create(spec)
            .map_err(SpecializedFailure::Construction)?;

        if self.settings.probe_specialized {
            debug!(model = spec.model.as_str(), "Probing specialized model handle");
            handle
                .chat(ModelRequest::prompt(PROBE_PROMPT))
                .await
                .map_err(SpecializedFailure::Probe)?;
        }
        Ok(handle)
    }

    fn resolve_provider(&self) -> Result<ProviderKind, ConfigError> {
        let provider_id = self
            .source
            .provider_id()
            .unwrap_or_else(|| self.settings.default_provider.clone());
        provider_id.parse()
    }

    fn client_spec(&self, choice: ModelChoice<'_>) -> Result<ClientSpec, ConfigError> {
        let provider = self.resolve_provider()?;
        let profile = self.settings.table.profile(provider)?;

        let model = match choice {
            ModelChoice::Primary(Some(model)) if !model.trim().is_empty() => model.trim(),
            ModelChoice::Primary(_) => profile.default_model.as_str(),
            ModelChoice::Specialized => profile.specialized_model.as_str(),
        };

        Ok(ClientSpec {
            provider,
            model: model.to_string(),
            options: profile.options.clone(),
            connection: profile.connection.clone(),
        })
    }
}

impl fmt::Debug for ModelProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ModelProvider")
            .field("settings", &self.settings)
            .field("cached", &self.cached_tag())
            .finish_non_exhaustive()
    }
}
