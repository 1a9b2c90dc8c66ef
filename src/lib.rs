//! Ask a local LLM server for recipes, with a dish-name validation gate in
//! front of every request.
//!
//! ```
//! use recipe_assistant::{validate, Verdict};
//!
//! assert!(validate("chicken-fried-rice").is_accepted());
//! assert_eq!(validate("pizza--salad").reason().as_deref(), Some("invalid hyphen placement"));
//! assert!(matches!(validate("car"), Verdict::Rejected(_)));
//! ```

pub mod assistant;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod prompt;
pub mod providers;
pub mod screening;
pub mod validator;

pub use assistant::{ProviderKind, RecipeAssistant, RecipeAssistantBuilder, RecipeOutcome};
pub use config::AppConfig;
pub use error::AssistantError;
pub use prompt::{ChatMessage, Role};
pub use providers::{LlmProvider, ProviderFactory};
pub use screening::{screen_completion, Screening};
pub use validator::{validate, Acceptance, DishNameValidator, RejectReason, Verdict};
