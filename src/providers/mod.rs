mod factory;
mod ollama;
mod open_ai;

pub use factory::ProviderFactory;
pub use ollama::OllamaProvider;
pub use open_ai::OpenAIProvider;

use crate::error::AssistantError;
use crate::prompt::ChatMessage;
use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use serde_json::Value;

/// Longest slice of a non-JSON error body quoted back to the user.
const MAX_QUOTED_BODY: usize = 200;

/// Unified trait for chat-completion backends
#[async_trait]
pub trait LlmProvider: Send + Sync {
    /// Get the provider name (e.g., "ollama", "openai")
    fn provider_name(&self) -> &str;

    /// Send an ordered list of role-tagged messages and return the completion text
    async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError>;
}

/// Turn a raw HTTP response into completion text.
///
/// Proxies and older servers answer errors with plain text or HTML, so the
/// body is only treated as JSON when it parses as JSON.
pub(crate) fn parse_completion(
    provider: &str,
    status: StatusCode,
    body: &str,
) -> Result<String, AssistantError> {
    let response_body: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => {
            let quoted: String = body.trim().chars().take(MAX_QUOTED_BODY).collect();
            return Err(AssistantError::Provider(format!(
                "{} returned HTTP {}: {}",
                provider, status, quoted
            )));
        }
        Err(e) => {
            return Err(AssistantError::MalformedResponse(format!(
                "{} response is not JSON: {}",
                provider, e
            )))
        }
    };
    debug!("{} response ({}): {:?}", provider, status, response_body);

    if !status.is_success() && response_body.get("error").is_none() {
        return Err(AssistantError::Provider(format!(
            "{} returned HTTP {}",
            provider, status
        )));
    }

    extract_completion(provider, &response_body)
}

/// Pull `choices[0].message.content` out of an OpenAI-compatible response body.
pub(crate) fn extract_completion(
    provider: &str,
    response_body: &Value,
) -> Result<String, AssistantError> {
    // Check for API error response
    if let Some(error) = response_body.get("error") {
        let error_message = error
            .as_str()
            .unwrap_or_else(|| error["message"].as_str().unwrap_or("Unknown error"));
        return Err(AssistantError::Provider(format!(
            "{} API error: {}",
            provider, error_message
        )));
    }

    response_body["choices"][0]["message"]["content"]
        .as_str()
        .map(|s| s.to_string())
        .ok_or_else(|| {
            AssistantError::MalformedResponse(format!(
                "Failed to extract content from {} response. Response: {}",
                provider,
                serde_json::to_string_pretty(response_body)
                    .unwrap_or_else(|_| response_body.to_string())
            ))
        })
}
