//! Language registry: Single source of truth for all supported languages.
//!
//! This module provides a centralized registry of all languages the coach can
//! run in. It uses a singleton pattern with `OnceLock` to ensure thread-safe
//! initialization and access.

use crate::i18n::strings::{ContentPack, ENGLISH_PACK, INDONESIAN_PACK};
use std::sync::OnceLock;

/// Configuration for a supported language.
///
/// Contains all metadata for a specific language, including its code, names,
/// the labels a user may pick it by, the action-verb allow-list used by the
/// rule-based validator, and its content pack.
#[derive(Debug, Clone)]
pub struct LanguageConfig {
    /// ISO 639-1 language code (e.g., "en", "id")
    pub code: &'static str,

    /// English name of the language, also the label offered at selection
    pub name: &'static str,

    /// Whether this is the canonical language (only one should be true)
    pub is_canonical: bool,

    /// Whether this language is enabled for use
    pub enabled: bool,

    /// Labels that select this language, in any supported language
    pub selection_labels: &'static [&'static str],

    /// Strong action verbs accepted as the first word of a bullet point
    pub action_verbs: &'static [&'static str],

    /// Localized strings
    pub pack: ContentPack,
}

/// Global language registry singleton.
pub struct LanguageRegistry {
    languages: Vec<LanguageConfig>,
}

/// Global registry instance (initialized lazily)
static REGISTRY: OnceLock<LanguageRegistry> = OnceLock::new();

impl LanguageRegistry {
    /// Get the global language registry instance.
    pub fn get() -> &'static LanguageRegistry {
        REGISTRY.get_or_init(|| LanguageRegistry {
            languages: default_languages(),
        })
    }

    /// Get a language configuration by its code.
    pub fn get_by_code(&self, code: &str) -> Option<&LanguageConfig> {
        self.languages.iter().find(|lang| lang.code == code)
    }

    /// Find the enabled language selected by an option label.
    ///
    /// Matching ignores surrounding whitespace and ASCII case.
    pub fn find_by_label(&self, label: &str) -> Option<&LanguageConfig> {
        let label = label.trim();
        self.languages
            .iter()
            .filter(|lang| lang.enabled)
            .find(|lang| {
                lang.selection_labels
                    .iter()
                    .any(|candidate| candidate.eq_ignore_ascii_case(label))
            })
    }

    /// Get all enabled languages.
    pub fn list_enabled(&self) -> Vec<&LanguageConfig> {
        self.languages.iter().filter(|lang| lang.enabled).collect()
    }

    /// Labels offered to the user at language selection.
    pub fn option_labels(&self) -> Vec<String> {
        self.list_enabled()
            .iter()
            .map(|lang| lang.name.to_string())
            .collect()
    }

    /// Get the canonical language configuration.
    ///
    /// # Panics
    /// Panics if no canonical language is found or if multiple canonical
    /// languages are defined (this indicates a configuration error).
    pub fn canonical(&self) -> &LanguageConfig {
        let canonical_langs: Vec<_> = self
            .languages
            .iter()
            .filter(|lang| lang.is_canonical)
            .collect();

        match canonical_langs.len() {
            0 => panic!("No canonical language found in registry"),
            1 => canonical_langs[0],
            _ => panic!("Multiple canonical languages found in registry"),
        }
    }
}

/// Default language configurations: English (canonical) and Indonesian.
fn default_languages() -> Vec<LanguageConfig> {
    vec![
        LanguageConfig {
            code: "en",
            name: "English",
            is_canonical: true,
            enabled: true,
            selection_labels: &["English", "Inggris"],
            action_verbs: ENGLISH_ACTION_VERBS,
            pack: ENGLISH_PACK,
        },
        LanguageConfig {
            code: "id",
            name: "Indonesian",
            is_canonical: false,
            enabled: true,
            selection_labels: &["Indonesian", "Indonesia", "Bahasa Indonesia"],
            action_verbs: INDONESIAN_ACTION_VERBS,
            pack: INDONESIAN_PACK,
        },
    ]
}

const ENGLISH_ACTION_VERBS: &[&str] = &[
    "accelerated", "achieved", "administered", "analyzed", "automated", "boosted",
    "built", "coached", "collaborated", "completed", "coordinated", "created",
    "cut", "decreased", "delivered", "designed", "developed", "directed",
    "drove", "engineered", "established", "executed", "expanded", "generated",
    "grew", "implemented", "improved", "increased", "initiated", "launched",
    "led", "managed", "mentored", "negotiated", "optimized", "organized",
    "oversaw", "planned", "produced", "reduced", "resolved", "restructured",
    "saved", "spearheaded", "streamlined", "supervised", "trained", "transformed",
];

const INDONESIAN_ACTION_VERBS: &[&str] = &[
    "mempercepat", "mencapai", "menganalisis", "mengotomatisasi", "membangun",
    "melatih", "mengoordinasikan", "membuat", "menciptakan", "mengurangi",
    "menurunkan", "menyelesaikan", "merancang", "mengembangkan", "mengarahkan",
    "menetapkan", "melaksanakan", "memperluas", "menghasilkan", "menerapkan",
    "meningkatkan", "memperbaiki", "memulai", "meluncurkan", "memimpin",
    "mengelola", "membimbing", "menegosiasikan", "mengoptimalkan",
    "mengorganisir", "mengawasi", "merencanakan", "memproduksi", "menghemat",
    "menyederhanakan", "mentransformasi",
];
