//! Rule-based validation: allow-listed opening verb, enough words, and some
//! form of quantification.

use super::{FormulaChecks, ValidationResult, Validator};
use crate::i18n::Language;
use async_trait::async_trait;
use regex::Regex;
use std::sync::OnceLock;

/// Shortest text (in characters, after trimming) worth validating
pub const MIN_TEXT_LENGTH: usize = 10;

/// A task description needs strictly more words than this
pub const MIN_WORD_COUNT: usize = 5;

static ALLOWED_CHARS_REGEX: OnceLock<Regex> = OnceLock::new();
static QUANTIFICATION_REGEX: OnceLock<Regex> = OnceLock::new();

/// Sanity check shared by every strategy and by the experience prompt.
///
/// Rejects empty text, text shorter than [`MIN_TEXT_LENGTH`], and text with
/// characters other than letters, digits, whitespace and basic punctuation.
pub fn passes_basic_check(text: &str) -> bool {
    let text = text.trim();
    if text.chars().count() < MIN_TEXT_LENGTH {
        return false;
    }

    let regex = ALLOWED_CHARS_REGEX.get_or_init(|| {
        Regex::new(r#"^[\p{L}\p{N}\s.,;:!?'"()/%&+$‘’“”–—-]+$"#).unwrap()
    });
    regex.is_match(text)
}

/// Heuristic validator
#[derive(Debug, Clone, Default)]
pub struct RuleBasedValidator;

impl RuleBasedValidator {
    pub fn new() -> Self {
        Self
    }

    /// Evaluate the three formula predicates independently.
    pub fn check(text: &str, language: Language) -> FormulaChecks {
        FormulaChecks {
            action_verb: Self::starts_with_action_verb(text, language),
            task_description: text.split_whitespace().count() > MIN_WORD_COUNT,
            quantification: Self::has_quantification(text),
        }
    }

    fn starts_with_action_verb(text: &str, language: Language) -> bool {
        let Some(first) = text.split_whitespace().next() else {
            return false;
        };
        let first = first
            .trim_matches(|c: char| !c.is_alphanumeric())
            .to_lowercase();

        language.action_verbs().iter().any(|verb| *verb == first)
    }

    fn has_quantification(text: &str) -> bool {
        let regex = QUANTIFICATION_REGEX
            .get_or_init(|| Regex::new(r"(?i)\d|%|\bpercent\b|\bpersen\b").unwrap());
        regex.is_match(text)
    }
}

#[async_trait]
impl Validator for RuleBasedValidator {
    async fn validate(&self, text: &str, language: Language) -> ValidationResult {
        if !passes_basic_check(text) {
            return ValidationResult::invalid_input(language);
        }
        ValidationResult::from_checks(Self::check(text.trim(), language), language)
    }
}
