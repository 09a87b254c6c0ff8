//! Model traits

use super::types::{ModelError, ModelRequest, ModelResponse};
use crate::config::{ConnectionConfig, GenerationOptions, ProviderKind};
use async_trait::async_trait;
use std::sync::Arc;

/// Shared, ready-to-use reference to a configured model client.
pub type ModelHandle = Arc<dyn ModelClient>;

/// Trait for individual model clients
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Get the client ID
    fn id(&self) -> &str;

    fn provider(&self) -> ProviderKind;

    /// Model every request through this client is sent to
    fn model(&self) -> &str;

    /// Generation options applied to every request
    fn options(&self) -> &GenerationOptions;

    /// Send a chat request
    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError>;
}

/// Everything a factory needs to build one client.
#[derive(Debug, Clone, PartialEq)]
pub struct ClientSpec {
    pub provider: ProviderKind,
    pub model: String,
    pub options: GenerationOptions,
    pub connection: ConnectionConfig,
}

/// Builds configured model clients.
pub trait ClientFactory: Send + Sync {
    fn create(&self, spec: &ClientSpec) -> Result<ModelHandle, ModelError>;
}
