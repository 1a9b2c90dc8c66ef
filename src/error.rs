use thiserror::Error;

/// Errors that can occur while talking to the text-generation service
///
/// Validation never produces an error; a rejected dish name is an ordinary
/// outcome, see [`crate::validator::Verdict`].
#[derive(Error, Debug)]
pub enum AssistantError {
    /// Transport failure or undecodable response body
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The service answered with an error
    #[error("Provider error: {0}")]
    Provider(String),

    /// The response did not contain a completion
    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    /// Provider name not known to the factory
    #[error("Unknown provider: {0}")]
    UnknownProvider(String),

    /// Builder configuration error
    #[error("Builder error: {0}")]
    Builder(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Console I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
