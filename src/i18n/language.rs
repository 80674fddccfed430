//! Language type: validated language representation.
//!
//! A `Language` can only be built from a code or a selection label that the
//! registry knows about, so holders never need to re-check it.

use crate::i18n::{ContentPack, LanguageConfig, LanguageRegistry};
use anyhow::{bail, Result};
use std::fmt;

/// A validated language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Language {
    /// ISO 639-1 language code (e.g., "en", "id")
    code: &'static str,
}

impl Language {
    pub const ENGLISH: Language = Language { code: "en" };

    pub const INDONESIAN: Language = Language { code: "id" };

    /// Create a Language from a language code string.
    ///
    /// # Returns
    /// * `Ok(Language)` if the code is valid and the language is enabled
    /// * `Err` if the code is not found or the language is disabled
    pub fn from_code(code: &str) -> Result<Language> {
        let registry = LanguageRegistry::get();

        match registry.get_by_code(code) {
            Some(config) if config.enabled => Ok(Language { code: config.code }),
            Some(_) => bail!("Language '{}' is not enabled", code),
            None => bail!("Unknown language code: '{}'", code),
        }
    }

    /// Resolve a user's language choice from one of the selection labels.
    ///
    /// Returns `None` for anything that isn't a known label; callers treat
    /// that as a re-prompt, not an error.
    pub fn from_selection(label: &str) -> Option<Language> {
        LanguageRegistry::get()
            .find_by_label(label)
            .map(|config| Language { code: config.code })
    }

    /// Get the canonical language.
    pub fn canonical() -> Language {
        let config = LanguageRegistry::get().canonical();
        Language { code: config.code }
    }

    /// Get the ISO 639-1 language code.
    pub fn code(&self) -> &'static str {
        self.code
    }

    /// Get the full language configuration from the registry.
    ///
    /// # Panics
    /// Panics if the language code is not found in the registry. This should
    /// never happen if the Language was constructed properly (via `from_code`,
    /// `from_selection` or constants).
    pub fn config(&self) -> &'static LanguageConfig {
        LanguageRegistry::get()
            .get_by_code(self.code)
            .expect("Language code should always be valid")
    }

    /// Get the English name of the language.
    pub fn name(&self) -> &'static str {
        self.config().name
    }

    /// Localized strings for this language.
    pub fn pack(&self) -> &'static ContentPack {
        &self.config().pack
    }

    /// Action-verb allow-list for this language.
    pub fn action_verbs(&self) -> &'static [&'static str] {
        self.config().action_verbs
    }

    /// Interpret a continue-or-stop answer in this language.
    ///
    /// Only this language's yes/no labels are accepted.
    pub fn parse_decision(&self, answer: &str) -> Option<bool> {
        let answer = answer.trim();
        let pack = self.pack();
        if answer.eq_ignore_ascii_case(pack.yes_label) {
            Some(true)
        } else if answer.eq_ignore_ascii_case(pack.no_label) {
            Some(false)
        } else {
            None
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Constant Tests ====================

    #[test]
    fn test_english_constant() {
        let english = Language::ENGLISH;
        assert_eq!(english.code(), "en");
        assert_eq!(english.name(), "English");
    }

    #[test]
    fn test_indonesian_constant() {
        let indonesian = Language::INDONESIAN;
        assert_eq!(indonesian.code(), "id");
        assert_eq!(indonesian.name(), "Indonesian");
    }

    // ==================== from_code Tests ====================

    #[test]
    fn test_from_code_indonesian() {
        let language = Language::from_code("id").expect("Should succeed");
        assert_eq!(language, Language::INDONESIAN);
    }

    #[test]
    fn test_from_code_invalid() {
        let result = Language::from_code("fr");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("Unknown"));
    }

    #[test]
    fn test_from_code_empty() {
        assert!(Language::from_code("").is_err());
    }

    #[test]
    fn test_canonical_returns_english() {
        assert_eq!(Language::canonical(), Language::ENGLISH);
    }

    // ==================== Selection Tests ====================

    #[test]
    fn test_from_selection_maps_localized_labels() {
        assert_eq!(Language::from_selection("English"), Some(Language::ENGLISH));
        assert_eq!(Language::from_selection("Inggris"), Some(Language::ENGLISH));
        assert_eq!(
            Language::from_selection("Indonesian"),
            Some(Language::INDONESIAN)
        );
        assert_eq!(
            Language::from_selection("Indonesia"),
            Some(Language::INDONESIAN)
        );
    }

    #[test]
    fn test_from_selection_rejects_free_text() {
        assert_eq!(Language::from_selection("I'd like English please"), None);
        assert_eq!(Language::from_selection("Spanish"), None);
    }

    // ==================== Decision Tests ====================

    #[test]
    fn test_parse_decision_english() {
        assert_eq!(Language::ENGLISH.parse_decision("Yes"), Some(true));
        assert_eq!(Language::ENGLISH.parse_decision(" no "), Some(false));
        assert_eq!(Language::ENGLISH.parse_decision("maybe"), None);
    }

    #[test]
    fn test_parse_decision_indonesian() {
        assert_eq!(Language::INDONESIAN.parse_decision("Ya"), Some(true));
        assert_eq!(Language::INDONESIAN.parse_decision("tidak"), Some(false));
    }

    #[test]
    fn test_parse_decision_rejects_other_language_labels() {
        assert_eq!(Language::ENGLISH.parse_decision("Ya"), None);
        assert_eq!(Language::INDONESIAN.parse_decision("Yes"), None);
    }

    #[test]
    fn test_display_uses_name() {
        assert_eq!(Language::INDONESIAN.to_string(), "Indonesian");
    }
}
