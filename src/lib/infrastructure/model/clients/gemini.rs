//! Gemini client implementation

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::{Value, json};
use tracing::{debug, info};

use super::base::HttpClientBase;
use crate::config::{GenerationOptions, ProviderKind};
use crate::constants::DEFAULT_GEMINI_API_PATH;
use crate::infrastructure::model::adapter::MessageAdapter;
use crate::infrastructure::model::traits::ModelClient;
use crate::infrastructure::model::types::{ModelError, ModelRequest, ModelResponse};

/// Gemini client for Google AI
#[derive(Clone)]
pub struct GeminiClient {
    base: HttpClientBase,
    api_path: String,
    model: String,
    options: GenerationOptions,
}

impl GeminiClient {
    pub fn new(
        base: HttpClientBase,
        api_path: Option<String>,
        model: String,
        options: GenerationOptions,
    ) -> Self {
        Self {
            base,
            api_path: api_path.unwrap_or_else(|| DEFAULT_GEMINI_API_PATH.to_string()),
            model,
            options,
        }
    }

    fn build_model_url(&self) -> String {
        let base = self.base.endpoint.trim_end_matches('/');
        let api_path = self.api_path.trim_matches('/');
        format!("{base}/{api_path}/{}:generateContent", self.model)
    }

    fn generation_config(&self) -> Value {
        let mut config = json!({ "temperature": self.options.temperature });
        if let Some(thinking) = &self.options.thinking {
            let mut thinking_config = json!({ "includeThoughts": thinking.include_thoughts });
            if let Some(budget) = thinking.budget_tokens {
                thinking_config["thinkingBudget"] = json!(budget);
            }
            config["thinkingConfig"] = thinking_config;
        }
        config
    }

    fn build_payload(&self, request: &ModelRequest) -> Value {
        let (system_text, contents) = MessageAdapter::to_gemini_format(&request.messages);

        let mut payload = json!({
            "contents": contents,
            "generationConfig": self.generation_config(),
        });

        if let Some(system) = system_text {
            payload["system_instruction"] = json!({
                "parts": [{"text": system}]
            });
        }
        payload
    }
}

#[async_trait]
impl ModelClient for GeminiClient {
    fn id(&self) -> &str {
        &self.base.id
    }

    fn provider(&self) -> ProviderKind {
        ProviderKind::Gemini
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn options(&self) -> &GenerationOptions {
        &self.options
    }

    async fn chat(&self, request: ModelRequest) -> Result<ModelResponse, ModelError> {
        let url = self.build_model_url();
        let payload = self.build_payload(&request);

        info!(
            provider = self.base.id.as_str(),
            model = self.model.as_str(),
            messages = request.messages.len(),
            "Sending request to Gemini"
        );

        let response: GeminiResponse = self.base.post_with_query_key(&url, &payload).await?;
        debug!("Received response from Gemini");

        let content = answer_text(response)
            .ok_or_else(|| ModelError::invalid_response(&self.base.id, "missing text"))?;

        Ok(ModelResponse::new(content))
    }
}

/// First text part not flagged `thought`. With thoughts included the
/// reasoning arrives as separate parts ahead of the answer.
fn answer_text(response: GeminiResponse) -> Option<String> {
    response
        .candidates
        .unwrap_or_default()
        .into_iter()
        .flat_map(|c| c.content)
        .flat_map(|c| c.parts)
        .filter(|p| !p.thought)
        .find_map(|p| p.text)
}

#[derive(Deserialize)]
struct GeminiResponse {
    candidates: Option<Vec<GeminiCandidate>>,
}

#[derive(Deserialize)]
struct GeminiCandidate {
    content: Option<GeminiContent>,
}

#[derive(Deserialize)]
struct GeminiContent {
    #[serde(default)]
    parts: Vec<GeminiPart>,
}

#[derive(Deserialize)]
struct GeminiPart {
    text: Option<String>,
    #[serde(default)]
    thought: bool,
}
