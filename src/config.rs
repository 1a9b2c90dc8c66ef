use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::time::Duration;

/// Main application configuration
///
/// Every field has a default, so the assistant runs against a local Ollama
/// server without any configuration file at all.
#[derive(Debug, Deserialize, Clone, Default)]
pub struct AppConfig {
    /// Text-generation service settings
    #[serde(default)]
    pub provider: ProviderConfig,
    /// Dish-name validation settings
    #[serde(default)]
    pub validation: ValidationConfig,
}

/// Configuration for the chat-completion provider
#[derive(Debug, Deserialize, Clone)]
pub struct ProviderConfig {
    /// Provider name ("ollama" or "openai")
    #[serde(default = "default_provider")]
    pub name: String,
    /// Whether this provider is enabled
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Model identifier (e.g., "llama2:latest", "gpt-4o-mini")
    #[serde(default = "default_model")]
    pub model: String,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout: u64,
    /// API key for authentication (Ollama ignores it)
    pub api_key: Option<String>,
    /// Base URL for API endpoint
    pub base_url: Option<String>,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: default_provider(),
            enabled: default_enabled(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: default_max_tokens(),
            timeout: default_timeout(),
            api_key: None,
            base_url: None,
        }
    }
}

impl ProviderConfig {
    /// Request timeout; zero is raised to one second
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout.max(1))
    }

    /// Reject values no chat-completion endpoint accepts
    pub fn check(&self) -> Result<(), String> {
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "Temperature must be between 0.0 and 2.0, got {}",
                self.temperature
            ));
        }
        Ok(())
    }
}

/// Configuration for the dish-name validator
#[derive(Debug, Deserialize, Clone)]
pub struct ValidationConfig {
    /// Reject names containing words such as "car" or "laptop"
    #[serde(default = "default_enabled")]
    pub reject_non_edible: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            reject_non_edible: default_enabled(),
        }
    }
}

// Default value functions
fn default_provider() -> String {
    "ollama".to_string()
}

fn default_enabled() -> bool {
    true
}

fn default_model() -> String {
    "llama2:latest".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_max_tokens() -> u32 {
    2000
}

fn default_timeout() -> u64 {
    120
}

impl AppConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_ASSISTANT__ prefix
    /// 2. recipe_assistant.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_ASSISTANT__PROVIDER__MODEL
    pub fn load() -> Result<Self, ConfigError> {
        load_config("recipe_assistant")
    }
}

/// Load configuration from the named file (extension optional) and the environment
pub fn load_config(file_name: &str) -> Result<AppConfig, ConfigError> {
    let settings = Config::builder()
        // Optional config file (can be missing)
        .add_source(File::with_name(file_name).required(false))
        // Use double underscore for nested: RECIPE_ASSISTANT__PROVIDER__BASE_URL
        .add_source(
            Environment::with_prefix("RECIPE_ASSISTANT")
                .prefix_separator("__")
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    let config: AppConfig = settings.try_deserialize()?;
    config.provider.check().map_err(ConfigError::Message)?;
    Ok(config)
}
