use crate::config::{AppConfig, ProviderConfig};
use crate::error::AssistantError;
use crate::providers::{LlmProvider, OllamaProvider, OpenAIProvider};
use log::info;

pub struct ProviderFactory;

impl ProviderFactory {
    /// Create a provider instance from configuration
    pub fn create(
        provider_name: &str,
        config: &ProviderConfig,
    ) -> Result<Box<dyn LlmProvider>, AssistantError> {
        // Validate that provider is enabled
        if !config.enabled {
            return Err(AssistantError::Builder(format!(
                "Provider '{}' is not enabled in configuration",
                provider_name
            )));
        }

        info!("Using provider '{}' with model '{}'", provider_name, config.model);

        match provider_name {
            "ollama" => Ok(Box::new(OllamaProvider::new(config)?)),
            "openai" => Ok(Box::new(OpenAIProvider::new(config)?)),
            _ => Err(AssistantError::UnknownProvider(provider_name.to_string())),
        }
    }

    /// Create the provider named in the application configuration
    pub fn from_config(config: &AppConfig) -> Result<Box<dyn LlmProvider>, AssistantError> {
        Self::create(&config.provider.name, &config.provider)
    }

    /// List all available provider names
    pub fn available_providers() -> Vec<&'static str> {
        vec!["ollama", "openai"]
    }
}
