//! Dish-name validation gate applied before any request reaches the
//! text-generation service.
//!
//! Validation is total: every input yields a [`Verdict`]. Rules run in a fixed
//! order and the first failing rule decides the outcome:
//!
//! 1. empty after trimming
//! 2. digits or forbidden punctuation
//! 3. hyphen at either end, or two hyphens in a row
//! 4. hyphen not joining two letters
//! 5. any hyphen-separated token in the food lexicon: accepted
//! 6. whole name is a known misspelling: accepted as corrected
//! 7. any token in the non-edible lexicon: rejected (strict mode only)
//! 8. anything else well-formed: accepted, left to the model to judge

use std::fmt;

use log::debug;

use crate::lexicon;

/// Characters that may never appear in a dish name (digits are checked separately).
const FORBIDDEN_CHARS: &[char] = &[
    '!', '@', '#', '$', '%', '^', '&', '*', '(', ')', '_', '+', '=', '|', '}', '{', '[', ']',
    '\\', '"', '\'', ':', ';', '?', '/', '>', '.', '<', ',', '~', '`',
];

/// Why a candidate was turned away.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RejectReason {
    EmptyInput,
    InvalidCharacters,
    InvalidHyphenPlacement,
    /// A token matched the non-edible lexicon
    NonEdible { token: String },
}

impl RejectReason {
    /// Extra guidance for the user, when there is any beyond the reason itself.
    pub fn diagnostic(&self) -> Option<String> {
        match self {
            RejectReason::NonEdible { token } => Some(format!(
                "'{}' does not look like food. Items such as {} cannot be turned into recipes.",
                token,
                lexicon::non_edible_categories().join(", ")
            )),
            _ => None,
        }
    }
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            RejectReason::EmptyInput => "empty input",
            RejectReason::InvalidCharacters => "invalid characters",
            RejectReason::InvalidHyphenPlacement => "invalid hyphen placement",
            RejectReason::NonEdible { .. } => "non-edible item",
        };
        f.write_str(reason)
    }
}

/// How an accepted candidate was recognised.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Acceptance {
    /// At least one token is a known food word
    Recognized,
    /// The whole name is a known misspelling of `canonical`
    Corrected { canonical: &'static str },
    /// Well-formed but unknown; the model decides
    Unrecognized,
}

/// Outcome of [`DishNameValidator::validate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    Accepted(Acceptance),
    Rejected(RejectReason),
}

impl Verdict {
    pub fn is_accepted(&self) -> bool {
        matches!(self, Verdict::Accepted(_))
    }

    /// Human-readable rejection reason, `None` when accepted.
    pub fn reason(&self) -> Option<String> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(reason) => Some(reason.to_string()),
        }
    }

    pub fn diagnostic(&self) -> Option<String> {
        match self {
            Verdict::Accepted(_) => None,
            Verdict::Rejected(reason) => reason.diagnostic(),
        }
    }
}

/// Classifies free-text dish names as acceptable or not.
#[derive(Debug, Clone, Copy)]
pub struct DishNameValidator {
    reject_non_edible: bool,
}

impl Default for DishNameValidator {
    fn default() -> Self {
        Self {
            reject_non_edible: true,
        }
    }
}

impl DishNameValidator {
    pub fn new(reject_non_edible: bool) -> Self {
        Self { reject_non_edible }
    }

    /// Whether names containing a non-edible word are rejected.
    pub fn rejects_non_edible(&self) -> bool {
        self.reject_non_edible
    }

    pub fn validate(&self, candidate: &str) -> Verdict {
        let verdict = self.classify(candidate);
        debug!("Validated {:?}: {:?}", candidate, verdict);
        verdict
    }

    fn classify(&self, candidate: &str) -> Verdict {
        let name = candidate.trim();
        if name.is_empty() {
            return Verdict::Rejected(RejectReason::EmptyInput);
        }

        if name
            .chars()
            .any(|c| c.is_ascii_digit() || FORBIDDEN_CHARS.contains(&c))
        {
            return Verdict::Rejected(RejectReason::InvalidCharacters);
        }

        if name.starts_with('-') || name.ends_with('-') || name.contains("--") {
            return Verdict::Rejected(RejectReason::InvalidHyphenPlacement);
        }

        if !hyphens_join_letters(name) {
            return Verdict::Rejected(RejectReason::InvalidHyphenPlacement);
        }

        let lowered = name.to_lowercase();
        let tokens: Vec<&str> = lowered.split('-').collect();

        if tokens.iter().any(|token| lexicon::is_food_word(token)) {
            return Verdict::Accepted(Acceptance::Recognized);
        }

        if let Some(canonical) = lexicon::correct_typo(&lowered) {
            return Verdict::Accepted(Acceptance::Corrected { canonical });
        }

        if self.reject_non_edible {
            if let Some(token) = tokens
                .iter()
                .find(|token| lexicon::is_non_edible_word(token))
            {
                return Verdict::Rejected(RejectReason::NonEdible {
                    token: token.to_string(),
                });
            }
        }

        Verdict::Accepted(Acceptance::Unrecognized)
    }
}

/// Every hyphen must sit between two alphabetic characters.
fn hyphens_join_letters(name: &str) -> bool {
    let chars: Vec<char> = name.chars().collect();
    chars.iter().enumerate().all(|(i, &c)| {
        if c != '-' {
            return true;
        }
        let before = i.checked_sub(1).and_then(|j| chars.get(j));
        let after = chars.get(i + 1);
        matches!((before, after), (Some(b), Some(a)) if b.is_alphabetic() && a.is_alphabetic())
    })
}

/// Validate with the default (strict) policy.
pub fn validate(candidate: &str) -> Verdict {
    DishNameValidator::default().validate(candidate)
}
