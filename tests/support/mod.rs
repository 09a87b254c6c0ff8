// Shared test doubles: a recording client factory and a scripted client.

#![allow(dead_code)]

use async_trait::async_trait;
use llm_handles::config::{GenerationOptions, ProviderKind};
use llm_handles::model::{
    ClientFactory, ClientSpec, ModelClient, ModelError, ModelHandle, ModelRequest, ModelResponse,
};
use std::collections::HashSet;
use std::sync::{Arc, Mutex};

pub struct MockClient {
    id: String,
    provider: ProviderKind,
    model: String,
    options: GenerationOptions,
    fail_chat: bool,
}

#[async_trait]
impl ModelClient for MockClient {
    fn id(&self) -> &str {
        &self.id
    }

    fn provider(&self) -> ProviderKind {
        self.provider
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn options(&self) -> &GenerationOptions {
        &self.options
    }

    async fn chat(&self, _request: ModelRequest) -> Result<ModelResponse, ModelError> {
        if self.fail_chat {
            return Err(ModelError::invalid_response(&self.id, "scripted failure"));
        }
        Ok(ModelResponse::new("pong".to_string()))
    }
}

/// Records every spec it is asked to build. Models listed in `failing`
/// fail construction; models in `unresponsive` build but fail every chat.
#[derive(Clone, Default)]
pub struct RecordingFactory {
    calls: Arc<Mutex<Vec<ClientSpec>>>,
    failing: Arc<Mutex<HashSet<String>>>,
    unresponsive: Arc<Mutex<HashSet<String>>>,
}

impl RecordingFactory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn fail_model(self, model: &str) -> Self {
        self.failing.lock().unwrap().insert(model.to_string());
        self
    }

    pub fn unresponsive_model(self, model: &str) -> Self {
        self.unresponsive.lock().unwrap().insert(model.to_string());
        self
    }

    pub fn calls(&self) -> Vec<ClientSpec> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    pub fn models(&self) -> Vec<String> {
        self.calls().into_iter().map(|spec| spec.model).collect()
    }
}

impl ClientFactory for RecordingFactory {
    fn create(&self, spec: &ClientSpec) -> Result<ModelHandle, ModelError> {
        let index = {
            let mut calls = self.calls.lock().unwrap();
            calls.push(spec.clone());
            calls.len()
        };

        if self.failing.lock().unwrap().contains(&spec.model) {
            return Err(ModelError::construction(
                spec.provider.as_str(),
                &spec.model,
                "model not available",
            ));
        }

        Ok(Arc::new(MockClient {
            id: format!("{}-{index}", spec.provider),
            provider: spec.provider,
            model: spec.model.clone(),
            options: spec.options.clone(),
            fail_chat: self.unresponsive.lock().unwrap().contains(&spec.model),
        }))
    }
}
