use anyhow::{bail, Result};
use std::str::FromStr;

/// Default zero-shot endpoint (Hugging Face inference API)
pub const DEFAULT_CLASSIFIER_API_URL: &str =
    "https://api-inference.huggingface.co/models/typeform/distilbert-base-uncased-mnli";

/// Which validation strategy checks practice rewrites
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorKind {
    /// Verb allow-list, word count and number heuristics
    Rules,
    /// External zero-shot text classifier
    Classifier,
}

impl FromStr for ValidatorKind {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rules" | "rule" | "heuristic" => Ok(ValidatorKind::Rules),
            "classifier" | "ml" | "zero-shot" => Ok(ValidatorKind::Classifier),
            other => bail!(
                "Invalid VALIDATOR value '{}'. Expected 'rules' or 'classifier'",
                other
            ),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    // Validation strategy
    pub validator: ValidatorKind,

    // Zero-shot classifier
    pub classifier_api_url: String,
    pub classifier_api_key: Option<String>,
    pub classifier_threshold: f64,
    pub classifier_timeout_secs: u64,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            validator: match std::env::var("VALIDATOR") {
                Ok(value) => value.parse()?,
                Err(_) => ValidatorKind::Rules,
            },

            classifier_api_url: std::env::var("CLASSIFIER_API_URL")
                .unwrap_or_else(|_| DEFAULT_CLASSIFIER_API_URL.to_string()),
            classifier_api_key: std::env::var("CLASSIFIER_API_KEY")
                .ok()
                .filter(|key| !key.is_empty()),
            classifier_threshold: std::env::var("CLASSIFIER_THRESHOLD")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|t: &f64| (0.0..=1.0).contains(t))
                .unwrap_or(0.5),
            classifier_timeout_secs: std::env::var("CLASSIFIER_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .filter(|secs: &u64| *secs > 0)
                .unwrap_or(30),
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            validator: ValidatorKind::Rules,
            classifier_api_url: DEFAULT_CLASSIFIER_API_URL.to_string(),
            classifier_api_key: None,
            classifier_threshold: 0.5,
            classifier_timeout_secs: 30,
        }
    }
}
