//! Validation of practice rewrites against the ATS formula
//! (Action Verb + Task Description + Quantification).
//!
//! Two strategies share the [`Validator`] trait:
//!
//! - `rules`: verb allow-list, word count and number heuristics
//! - `classifier`: an external zero-shot text classifier over HTTP
//!
//! Which one runs is decided once, from [`Config::validator`].

mod classifier;
mod metrics;
mod rules;

pub use classifier::{ClassifierError, LabelScores, ZeroShotValidator, CANDIDATE_LABELS};
pub use metrics::{MetricsReport, ValidationMetrics};
pub use rules::{passes_basic_check, RuleBasedValidator, MIN_TEXT_LENGTH, MIN_WORD_COUNT};

use crate::config::{Config, ValidatorKind};
use crate::i18n::Language;
use anyhow::Result;
use async_trait::async_trait;
use serde::Serialize;
use tracing::info;

/// Outcome category of a validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    /// All three formula parts are present
    Passed,
    /// Text failed the basic sanity check (empty, too short, odd characters)
    InvalidInput,
    /// Text is a sentence but misses part of the formula
    NeedsWork,
}

/// Verdict plus the localized feedback shown to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationResult {
    pub verdict: Verdict,
    pub feedback: String,
}

impl ValidationResult {
    pub fn passed(&self) -> bool {
        self.verdict == Verdict::Passed
    }

    pub fn good(language: Language) -> Self {
        Self {
            verdict: Verdict::Passed,
            feedback: language.pack().feedback_good.to_string(),
        }
    }

    pub fn invalid_input(language: Language) -> Self {
        Self {
            verdict: Verdict::InvalidInput,
            feedback: language.pack().invalid_input.to_string(),
        }
    }

    /// Generic needs-work result without per-part hints.
    pub fn needs_work(language: Language) -> Self {
        Self {
            verdict: Verdict::NeedsWork,
            feedback: language.pack().feedback_needs_work.to_string(),
        }
    }

    /// Build the result from individual formula checks.
    ///
    /// A failing result lists one hint per missing part under the general
    /// needs-work message.
    pub fn from_checks(checks: FormulaChecks, language: Language) -> Self {
        if checks.all_present() {
            return Self::good(language);
        }

        let pack = language.pack();
        let mut feedback = pack.feedback_needs_work.to_string();
        let hints = [
            (checks.action_verb, pack.hint_action_verb),
            (checks.task_description, pack.hint_task_description),
            (checks.quantification, pack.hint_quantification),
        ];
        for (present, hint) in hints {
            if !present {
                feedback.push('\n');
                feedback.push_str(hint);
            }
        }

        Self {
            verdict: Verdict::NeedsWork,
            feedback,
        }
    }
}

/// Which parts of the formula a sentence contains
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FormulaChecks {
    pub action_verb: bool,
    pub task_description: bool,
    pub quantification: bool,
}

impl FormulaChecks {
    pub fn all_present(&self) -> bool {
        self.action_verb && self.task_description && self.quantification
    }
}

/// Checks a candidate bullet point in the given language.
///
/// Implementations never fail: problems with the text or with an external
/// service are reported through the returned verdict.
#[async_trait]
pub trait Validator: Send + Sync {
    async fn validate(&self, text: &str, language: Language) -> ValidationResult;
}

/// Build the validator selected by configuration.
pub fn from_config(config: &Config) -> Result<Box<dyn Validator>> {
    match config.validator {
        ValidatorKind::Rules => {
            info!("Using rule-based validator");
            Ok(Box::new(RuleBasedValidator::new()))
        }
        ValidatorKind::Classifier => {
            info!(
                "Using zero-shot classifier at {} (threshold {})",
                config.classifier_api_url, config.classifier_threshold
            );
            Ok(Box::new(ZeroShotValidator::from_config(config)?))
        }
    }
}
