//! Best-effort classification of completion text.
//!
//! Models phrase refusals freely, so this is a presentation hint only: the
//! completion is always shown to the user, with a note when it looks like the
//! model declined to write a recipe.

const DECLINE_PHRASES: &[&str] = &[
    "i'm sorry",
    "i am sorry",
    "i apologize",
    "i cannot",
    "i can't",
    "i can not",
    "not a food",
    "not edible",
    "not something that can be eaten",
    "as an ai",
];

/// What a completion appears to contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screening {
    Recipe,
    Declined,
}

pub fn screen_completion(text: &str) -> Screening {
    let text = text.trim();
    if text.is_empty() {
        return Screening::Declined;
    }

    // Typographic apostrophes are common in model output
    let lowered = text.to_lowercase().replace('\u{2019}', "'");
    if DECLINE_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
    {
        Screening::Declined
    } else {
        Screening::Recipe
    }
}
