use std::time::Duration;

use log::{info, warn};

use crate::config::AppConfig;
use crate::error::AssistantError;
use crate::prompt::{dish_messages, recommendation_messages};
use crate::providers::{LlmProvider, ProviderFactory};
use crate::screening::{screen_completion, Screening};
use crate::validator::{Acceptance, DishNameValidator, RejectReason, Verdict};

/// Result of asking for a single dish
#[derive(Debug, Clone, PartialEq)]
pub enum RecipeOutcome {
    /// The dish name failed validation; nothing was sent
    Rejected(RejectReason),
    /// The service answered
    Recipe {
        /// Name that was sent to the service
        dish: String,
        /// Completion text, verbatim
        text: String,
        screening: Screening,
    },
}

/// Which chat-completion backend to talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Ollama,
    OpenAI,
}

impl ProviderKind {
    /// Convert to provider name string used by the factory
    pub fn as_str(&self) -> &'static str {
        match self {
            ProviderKind::Ollama => "ollama",
            ProviderKind::OpenAI => "openai",
        }
    }
}

/// Validates dish names and asks the text-generation service for recipes
pub struct RecipeAssistant {
    validator: DishNameValidator,
    provider: Box<dyn LlmProvider>,
}

impl RecipeAssistant {
    /// Creates a new builder for the assistant
    ///
    /// # Example
    /// ```
    /// use recipe_assistant::RecipeAssistant;
    ///
    /// let assistant = RecipeAssistant::builder()
    ///     .model("llama3")
    ///     .reject_non_edible(false)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(assistant.provider_name(), "ollama");
    /// ```
    pub fn builder() -> RecipeAssistantBuilder {
        RecipeAssistantBuilder::default()
    }

    pub fn new(validator: DishNameValidator, provider: Box<dyn LlmProvider>) -> Self {
        Self {
            validator,
            provider,
        }
    }

    pub fn validator(&self) -> &DishNameValidator {
        &self.validator
    }

    pub fn provider_name(&self) -> &str {
        self.provider.provider_name()
    }

    /// Validate `candidate` and, if accepted, ask the service for a recipe.
    ///
    /// A rejected name is returned as [`RecipeOutcome::Rejected`] without any
    /// network traffic. Transport and service failures are errors.
    pub async fn recipe_for(&self, candidate: &str) -> Result<RecipeOutcome, AssistantError> {
        let dish = match self.validator.validate(candidate) {
            Verdict::Rejected(reason) => {
                info!("Rejected dish name {:?}: {}", candidate, reason);
                return Ok(RecipeOutcome::Rejected(reason));
            }
            Verdict::Accepted(Acceptance::Corrected { canonical }) => {
                info!("Corrected {:?} to {:?}", candidate.trim(), canonical);
                canonical.to_string()
            }
            Verdict::Accepted(_) => candidate.trim().to_string(),
        };

        let text = self.provider.complete(&dish_messages(&dish)).await?;
        let screening = screen_completion(&text);
        if screening == Screening::Declined {
            warn!("Completion for {:?} looks like a refusal", dish);
        }

        Ok(RecipeOutcome::Recipe {
            dish,
            text,
            screening,
        })
    }

    /// Ask for 3-5 recipe suggestions from pantry ingredients and dietary restrictions.
    pub async fn recommend<S: AsRef<str> + Sync>(
        &self,
        ingredients: &[S],
        restrictions: &[S],
    ) -> Result<String, AssistantError> {
        let messages = recommendation_messages(ingredients, restrictions);
        self.provider.complete(&messages).await
    }
}

/// Builder for configuring a [`RecipeAssistant`]
#[derive(Default)]
pub struct RecipeAssistantBuilder {
    config: AppConfig,
    provider_kind: Option<ProviderKind>,
    provider: Option<Box<dyn LlmProvider>>,
    base_url: Option<String>,
    model: Option<String>,
    api_key: Option<String>,
    temperature: Option<f32>,
    timeout: Option<Duration>,
    reject_non_edible: Option<bool>,
}

impl RecipeAssistantBuilder {
    /// Start from a loaded configuration; explicit builder calls still win
    pub fn from_config(mut self, config: AppConfig) -> Self {
        self.config = config;
        self
    }

    /// Select the backend by kind
    pub fn provider(mut self, kind: ProviderKind) -> Self {
        self.provider_kind = Some(kind);
        self
    }

    /// Use an already constructed backend, bypassing the factory
    pub fn with_provider(mut self, provider: Box<dyn LlmProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the model name for the LLM provider
    pub fn model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    /// Set the API key for the LLM provider
    ///
    /// This allows passing the API key directly instead of relying on
    /// environment variables or config files.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    pub fn temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    /// Set a timeout for HTTP requests
    pub fn timeout(mut self, duration: Duration) -> Self {
        self.timeout = Some(duration);
        self
    }

    /// Toggle rejection of names such as "car" or "laptop"
    pub fn reject_non_edible(mut self, reject: bool) -> Self {
        self.reject_non_edible = Some(reject);
        self
    }

    /// Build the assistant
    ///
    /// # Errors
    /// Returns `AssistantError` if the provider is unknown, disabled, or
    /// missing a required API key.
    pub fn build(self) -> Result<RecipeAssistant, AssistantError> {
        let mut config = self.config;

        if let Some(kind) = self.provider_kind {
            config.provider.name = kind.as_str().to_string();
        }
        if let Some(url) = self.base_url {
            config.provider.base_url = Some(url);
        }
        if let Some(model) = self.model {
            config.provider.model = model;
        }
        if let Some(key) = self.api_key {
            config.provider.api_key = Some(key);
        }
        if let Some(temperature) = self.temperature {
            config.provider.temperature = temperature;
        }
        if let Some(timeout) = self.timeout {
            config.provider.timeout = timeout.as_secs();
        }
        if let Some(reject) = self.reject_non_edible {
            config.validation.reject_non_edible = reject;
        }

        // Values from a config file get the same checks as builder calls
        config.provider.check().map_err(AssistantError::Builder)?;
        config.provider.timeout = config.provider.timeout.max(1);

        let provider = match self.provider {
            Some(provider) => provider,
            None => ProviderFactory::from_config(&config)?,
        };

        Ok(RecipeAssistant::new(
            DishNameValidator::new(config.validation.reject_non_edible),
            provider,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::{ChatMessage, Role};
    use async_trait::async_trait;
    use std::sync::{Arc, Mutex};

    /// Records every request and answers with a fixed reply
    struct CannedProvider {
        reply: String,
        requests: Arc<Mutex<Vec<Vec<ChatMessage>>>>,
    }

    impl CannedProvider {
        fn new(reply: &str) -> (Self, Arc<Mutex<Vec<Vec<ChatMessage>>>>) {
            let requests = Arc::new(Mutex::new(Vec::new()));
            (
                Self {
                    reply: reply.to_string(),
                    requests: Arc::clone(&requests),
                },
                requests,
            )
        }
    }

    #[async_trait]
    impl LlmProvider for CannedProvider {
        fn provider_name(&self) -> &str {
            "canned"
        }

        async fn complete(&self, messages: &[ChatMessage]) -> Result<String, AssistantError> {
            self.requests.lock().unwrap().push(messages.to_vec());
            Ok(self.reply.clone())
        }
    }

    fn assistant_with(reply: &str) -> (RecipeAssistant, Arc<Mutex<Vec<Vec<ChatMessage>>>>) {
        let (provider, requests) = CannedProvider::new(reply);
        let assistant = RecipeAssistant::builder()
            .with_provider(Box::new(provider))
            .build()
            .unwrap();
        (assistant, requests)
    }

    #[tokio::test]
    async fn test_rejected_name_sends_nothing() {
        let (assistant, requests) = assistant_with("unused");
        let outcome = assistant.recipe_for("pizza--salad").await.unwrap();
        assert_eq!(
            outcome,
            RecipeOutcome::Rejected(RejectReason::InvalidHyphenPlacement)
        );
        assert!(requests.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_accepted_name_is_forwarded_trimmed() {
        let (assistant, requests) = assistant_with("1. Boil the noodles");
        let outcome = assistant.recipe_for("  ramen ").await.unwrap();
        assert_eq!(
            outcome,
            RecipeOutcome::Recipe {
                dish: "ramen".to_string(),
                text: "1. Boil the noodles".to_string(),
                screening: Screening::Recipe,
            }
        );

        let requests = requests.lock().unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].len(), 2);
        assert_eq!(requests[0][0].role, Role::System);
        assert!(requests[0][1].content.contains("ramen"));
    }

    #[tokio::test]
    async fn test_typo_is_corrected_before_sending() {
        let (assistant, requests) = assistant_with("Kale chips");
        let outcome = assistant.recipe_for("kali").await.unwrap();
        match outcome {
            RecipeOutcome::Recipe { dish, .. } => assert_eq!(dish, "kale"),
            other => panic!("Expected recipe, got {:?}", other),
        }
        assert!(requests.lock().unwrap()[0][1]
            .content
            .contains("recipe for kale."));
    }

    #[tokio::test]
    async fn test_declined_completion_is_flagged() {
        let (assistant, _) = assistant_with("I'm sorry, xyzzy is not a food.");
        match assistant.recipe_for("xyzzy").await.unwrap() {
            RecipeOutcome::Recipe { screening, .. } => assert_eq!(screening, Screening::Declined),
            other => panic!("Expected recipe, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_lenient_assistant_forwards_non_edible() {
        let (provider, requests) = CannedProvider::new("That is a vehicle.");
        let assistant = RecipeAssistant::builder()
            .with_provider(Box::new(provider))
            .reject_non_edible(false)
            .build()
            .unwrap();

        assert!(!assistant.validator().rejects_non_edible());
        let outcome = assistant.recipe_for("car").await.unwrap();
        assert!(matches!(outcome, RecipeOutcome::Recipe { .. }));
        assert_eq!(requests.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_recommend() {
        let (assistant, requests) = assistant_with("1. Frittata\n2. Omelette");
        let text = assistant
            .recommend(&["eggs", "spinach"], &["vegetarian"])
            .await
            .unwrap();
        assert!(text.contains("Frittata"));
        let requests = requests.lock().unwrap();
        assert!(requests[0][1].content.contains("eggs, spinach"));
    }

    #[test]
    fn test_builder_selects_provider_kind() {
        let assistant = RecipeAssistant::builder()
            .provider(ProviderKind::OpenAI)
            .api_key("sk-test")
            .build()
            .unwrap();
        assert_eq!(assistant.provider_name(), "openai");
    }

    #[test]
    fn test_builder_rejects_bad_temperature() {
        let result = RecipeAssistant::builder().temperature(5.0).build();
        assert!(matches!(result, Err(AssistantError::Builder(_))));
    }

    #[test]
    fn test_builder_rejects_bad_temperature_from_config() {
        let mut config = AppConfig::default();
        config.provider.temperature = -1.0;
        let result = RecipeAssistant::builder().from_config(config).build();
        match result {
            Err(AssistantError::Builder(msg)) => assert!(msg.contains("Temperature")),
            _ => panic!("Expected builder error"),
        }
    }

    #[test]
    fn test_builder_accepts_zero_timeout_from_config() {
        let mut config = AppConfig::default();
        config.provider.timeout = 0;
        let assistant = RecipeAssistant::builder()
            .from_config(config)
            .build()
            .unwrap();
        assert_eq!(assistant.provider_name(), "ollama");
    }

    #[test]
    fn test_builder_respects_config() {
        let mut config = AppConfig::default();
        config.validation.reject_non_edible = false;
        let assistant = RecipeAssistant::builder()
            .from_config(config)
            .build()
            .unwrap();
        assert!(!assistant.validator().rejects_non_edible());
        assert_eq!(assistant.provider_name(), "ollama");
    }
}
