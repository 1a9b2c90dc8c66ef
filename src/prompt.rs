use serde::{Deserialize, Serialize};

/// System instruction sent with every single-dish recipe request.
///
/// The prompt texts are loaded from `prompts/` at compile time using the
/// `include_str!` macro, making them easy to edit without dealing with
/// Rust string syntax.
pub const DISH_SYSTEM_PROMPT: &str = include_str!("prompts/dish_system.txt");

/// User instruction for a single dish. Contains a `{{DISH}}` placeholder.
pub const DISH_USER_PROMPT: &str = include_str!("prompts/dish_user.txt");

pub const RECOMMENDATION_SYSTEM_PROMPT: &str = include_str!("prompts/recommendation_system.txt");

pub const RECOMMENDATION_USER_PROMPT: &str = include_str!("prompts/recommendation_user.txt");

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// One role-tagged entry of a chat-completion request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Injects the dish name into the user prompt template.
pub fn inject_dish(dish: &str) -> String {
    DISH_USER_PROMPT.replace("{{DISH}}", dish.trim())
}

/// The fixed two-message request for a single dish: system, then user.
pub fn dish_messages(dish: &str) -> Vec<ChatMessage> {
    vec![
        ChatMessage::system(DISH_SYSTEM_PROMPT),
        ChatMessage::user(inject_dish(dish)),
    ]
}

/// Request for 3-5 recipe suggestions, optionally constrained by what is in
/// the pantry and by dietary restrictions. Blank entries are ignored.
pub fn recommendation_messages<S: AsRef<str>>(
    ingredients: &[S],
    restrictions: &[S],
) -> Vec<ChatMessage> {
    let mut user_prompt = RECOMMENDATION_USER_PROMPT.trim_end().to_string();

    let ingredients = non_blank(ingredients);
    if !ingredients.is_empty() {
        user_prompt.push_str(&format!(
            "\nI have these ingredients: {}",
            ingredients.join(", ")
        ));
    }

    let restrictions = non_blank(restrictions);
    if !restrictions.is_empty() {
        user_prompt.push_str(&format!(
            "\nI need to follow these dietary restrictions: {}",
            restrictions.join(", ")
        ));
    }

    vec![
        ChatMessage::system(RECOMMENDATION_SYSTEM_PROMPT),
        ChatMessage::user(user_prompt),
    ]
}

fn non_blank<S: AsRef<str>>(items: &[S]) -> Vec<&str> {
    items
        .iter()
        .map(|item| item.as_ref().trim())
        .filter(|item| !item.is_empty())
        .collect()
}
