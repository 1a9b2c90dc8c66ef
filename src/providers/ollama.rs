use super::{parse_completion, LlmProvider};
use crate::config::ProviderConfig;
use crate::error::AssistantError;
use crate::prompt::ChatMessage;
use async_trait::async_trait;
use log::debug;
use reqwest::Client;
use serde_json::json;

pub const DEFAULT_OLLAMA_URL: &str = "http://localhost:11434";

/// Ollama ignores the key, but its OpenAI-compatible endpoint expects one.
const OLLAMA_DUMMY_KEY: &str = "ollama";

pub struct OllamaProvider {
    client: Client,
    base_url: String,
    api_key: String,
    model: String,
    temperature: f32,
    max_tokens: u32,
}

impl OllamaProvider {
    /// Create a new Ollama provider from configuration
    pub fn new(config: &ProviderConfig) -> Result<Self, AssistantError> {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_OLLAMA_URL.to_string());

        let client = Client::builder()
            .timeout(config.request_timeout())
            .build()?;

        Ok(OllamaProvider {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: config
                .api_key
                .clone()
                .unwrap_or_else(|| OLLAMA_DUMMY_KEY.to_string()),
            model: config.model.clone(),
            temperature: config.temperature,
            max_tokens: config.max_tokens,
        })
    }

    #[doc(hidden)]
    pub fn with_base_url(base_url: String, model: String) -> Self {
        OllamaProvider {
            client: Client::new(),
            base_url,
            api_key: OLLAMA_DUMMY_KEY.to_string(),
            model,
            temperature: 0.7,
            max_tokens: 2000,
        }
    }
}

#[async_trait]
impl LlmProvider for OllamaProvider {
    fn provider_name(&self) -> &str {
        "ollama"
    }

    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError> {
        debug!(
            "Sending {} messages to {} ({})",
            messages.len(),
            self.base_url,
            self.model
        );

        // Ollama uses OpenAI-compatible API
        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(&self.api_key)
            .json(&json!({
                "model": self.model,
                "messages": messages,
                "temperature": self.temperature,
                "max_tokens": self.max_tokens
            }))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        parse_completion(self.provider_name(), status, &body)
    }
}
