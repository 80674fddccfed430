//! Zero-shot classification strategy.
//!
//! Sends the sentence to a Hugging Face style zero-shot endpoint with one
//! candidate label per formula part and accepts it only when every label
//! scores above the configured threshold.

use super::{passes_basic_check, FormulaChecks, ValidationMetrics, ValidationResult, Validator};
use crate::config::Config;
use crate::i18n::Language;
use crate::retry::{with_retry_if, RetryConfig};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, warn};

pub const LABEL_ACTION_VERB: &str = "has_action_verb";
pub const LABEL_TASK_DESCRIPTION: &str = "has_task_description";
pub const LABEL_QUANTIFICATION: &str = "has_quantification";

/// Candidate labels sent with every request
pub const CANDIDATE_LABELS: [&str; 3] =
    [LABEL_ACTION_VERB, LABEL_TASK_DESCRIPTION, LABEL_QUANTIFICATION];

#[derive(Debug, thiserror::Error)]
pub enum ClassifierError {
    #[error("request to classifier failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("classifier API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error("malformed classifier response: {0}")]
    Malformed(String),
}

impl ClassifierError {
    /// Network failures, rate limits and 5xx (including a model that is
    /// still loading) are worth another attempt. Other errors are not.
    pub fn is_retryable(&self) -> bool {
        match self {
            ClassifierError::Request(_) => true,
            ClassifierError::Api { status, .. } => *status == 429 || *status >= 500,
            ClassifierError::Malformed(_) => false,
        }
    }
}

#[derive(Debug, Serialize)]
struct ClassificationRequest<'a> {
    inputs: &'a str,
    parameters: ClassificationParameters,
}

#[derive(Debug, Serialize)]
struct ClassificationParameters {
    candidate_labels: Vec<&'static str>,
    /// Labels are scored independently; with a softmax across labels three
    /// scores above 0.5 would be impossible.
    multi_label: bool,
}

/// Both shapes the inference API is known to answer with
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ClassificationResponse {
    Pipeline {
        labels: Vec<String>,
        scores: Vec<f64>,
    },
    Pairs(Vec<LabelScore>),
}

#[derive(Debug, Deserialize)]
struct LabelScore {
    label: String,
    score: f64,
}

/// Confidence per formula part, in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabelScores {
    pub action_verb: f64,
    pub task_description: f64,
    pub quantification: f64,
}

impl LabelScores {
    /// Match scores to labels by name; the service sorts labels by score.
    fn from_pairs<I>(pairs: I) -> Result<Self, ClassifierError>
    where
        I: IntoIterator<Item = (String, f64)>,
    {
        let mut action_verb = None;
        let mut task_description = None;
        let mut quantification = None;

        for (label, score) in pairs {
            match label.as_str() {
                LABEL_ACTION_VERB => action_verb = Some(score),
                LABEL_TASK_DESCRIPTION => task_description = Some(score),
                LABEL_QUANTIFICATION => quantification = Some(score),
                _ => {}
            }
        }

        let missing = |name: &str| ClassifierError::Malformed(format!("no score for '{}'", name));
        Ok(Self {
            action_verb: action_verb.ok_or_else(|| missing(LABEL_ACTION_VERB))?,
            task_description: task_description.ok_or_else(|| missing(LABEL_TASK_DESCRIPTION))?,
            quantification: quantification.ok_or_else(|| missing(LABEL_QUANTIFICATION))?,
        })
    }

    fn from_response(response: ClassificationResponse) -> Result<Self, ClassifierError> {
        match response {
            ClassificationResponse::Pipeline { labels, scores } => {
                if labels.len() != scores.len() {
                    return Err(ClassifierError::Malformed(format!(
                        "{} labels but {} scores",
                        labels.len(),
                        scores.len()
                    )));
                }
                Self::from_pairs(labels.into_iter().zip(scores))
            }
            ClassificationResponse::Pairs(pairs) => {
                Self::from_pairs(pairs.into_iter().map(|p| (p.label, p.score)))
            }
        }
    }

    /// A part counts as present when its score is strictly above `threshold`.
    pub fn checks(&self, threshold: f64) -> FormulaChecks {
        FormulaChecks {
            action_verb: self.action_verb > threshold,
            task_description: self.task_description > threshold,
            quantification: self.quantification > threshold,
        }
    }
}

/// Validator backed by an external zero-shot classifier
pub struct ZeroShotValidator {
    client: reqwest::Client,
    api_url: String,
    api_key: Option<String>,
    threshold: f64,
    retry: RetryConfig,
}

impl ZeroShotValidator {
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.classifier_timeout_secs))
            .build()
            .context("Failed to build HTTP client for classifier")?;

        Ok(Self {
            client,
            api_url: config.classifier_api_url.clone(),
            api_key: config.classifier_api_key.clone(),
            threshold: config.classifier_threshold,
            retry: RetryConfig::classifier(),
        })
    }

    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Score `text` against the three candidate labels.
    pub async fn classify(&self, text: &str) -> Result<LabelScores, ClassifierError> {
        let request = ClassificationRequest {
            inputs: text,
            parameters: ClassificationParameters {
                candidate_labels: CANDIDATE_LABELS.to_vec(),
                multi_label: true,
            },
        };

        with_retry_if(
            &self.retry,
            "Zero-shot classification",
            || async {
                let mut builder = self.client.post(&self.api_url).json(&request);
                if let Some(key) = &self.api_key {
                    builder = builder.bearer_auth(key);
                }
                let response = builder.send().await?;

                if !response.status().is_success() {
                    let status = response.status().as_u16();
                    let body = response
                        .text()
                        .await
                        .unwrap_or_else(|e| format!("<failed to read body: {}>", e));
                    return Err(ClassifierError::Api { status, body });
                }

                let parsed: ClassificationResponse = response
                    .json()
                    .await
                    .map_err(|e| ClassifierError::Malformed(e.to_string()))?;
                LabelScores::from_response(parsed)
            },
            ClassifierError::is_retryable,
        )
        .await
    }
}

#[async_trait]
impl Validator for ZeroShotValidator {
    async fn validate(&self, text: &str, language: Language) -> ValidationResult {
        if !passes_basic_check(text) {
            return ValidationResult::invalid_input(language);
        }

        let metrics = ValidationMetrics::global();
        metrics.record_classifier_call();

        match self.classify(text.trim()).await {
            Ok(scores) => {
                debug!(?scores, "Classifier scores");
                ValidationResult::from_checks(scores.checks(self.threshold), language)
            }
            Err(e) => {
                metrics.record_classifier_failure();
                warn!("Classifier unavailable, treating rewrite as needs-work: {}", e);
                ValidationResult::needs_work(language)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validator::Verdict;
    use wiremock::{
        matchers::{body_partial_json, header, method, path},
        Mock, MockServer, ResponseTemplate,
    };

    const GOOD_SENTENCE: &str = "Managed a team of five and increased output by 20%";

    fn create_validator(server: &MockServer, api_key: Option<&str>) -> ZeroShotValidator {
        let config = Config {
            classifier_api_url: format!("{}/models/zero-shot", server.uri()),
            classifier_api_key: api_key.map(str::to_string),
            classifier_timeout_secs: 5,
            ..Config::default()
        };
        ZeroShotValidator::from_config(&config)
            .expect("Should build")
            .with_retry(RetryConfig::new(2, Duration::from_millis(5)))
    }

    fn pipeline_response(action: f64, task: f64, quantity: f64) -> serde_json::Value {
        // Sorted by score the way the pipeline returns them
        let mut pairs = vec![
            (LABEL_ACTION_VERB, action),
            (LABEL_TASK_DESCRIPTION, task),
            (LABEL_QUANTIFICATION, quantity),
        ];
        pairs.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap());
        serde_json::json!({
            "sequence": GOOD_SENTENCE,
            "labels": pairs.iter().map(|p| p.0).collect::<Vec<_>>(),
            "scores": pairs.iter().map(|p| p.1).collect::<Vec<_>>(),
        })
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_request_serialization() {
        let request = ClassificationRequest {
            inputs: "Managed things",
            parameters: ClassificationParameters {
                candidate_labels: CANDIDATE_LABELS.to_vec(),
                multi_label: true,
            },
        };
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["inputs"], "Managed things");
        assert_eq!(json["parameters"]["multi_label"], true);
        assert_eq!(
            json["parameters"]["candidate_labels"],
            serde_json::json!(["has_action_verb", "has_task_description", "has_quantification"])
        );
    }

    #[test]
    fn test_scores_matched_by_label_not_position() {
        let json = r#"{
            "sequence": "x",
            "labels": ["has_quantification", "has_action_verb", "has_task_description"],
            "scores": [0.9, 0.6, 0.2]
        }"#;
        let response: ClassificationResponse = serde_json::from_str(json).unwrap();
        let scores = LabelScores::from_response(response).unwrap();

        assert_eq!(scores.quantification, 0.9);
        assert_eq!(scores.action_verb, 0.6);
        assert_eq!(scores.task_description, 0.2);
    }

    #[test]
    fn test_pairs_response_shape() {
        let json = r#"[
            {"label": "has_task_description", "score": 0.8},
            {"label": "has_action_verb", "score": 0.7},
            {"label": "has_quantification", "score": 0.6}
        ]"#;
        let response: ClassificationResponse = serde_json::from_str(json).unwrap();
        let scores = LabelScores::from_response(response).unwrap();
        assert_eq!(scores.task_description, 0.8);
    }

    #[test]
    fn test_missing_label_is_malformed() {
        let response = ClassificationResponse::Pipeline {
            labels: vec!["has_action_verb".to_string()],
            scores: vec![0.9],
        };
        let err = LabelScores::from_response(response).unwrap_err();
        assert!(matches!(err, ClassifierError::Malformed(_)));
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_length_mismatch_is_malformed() {
        let response = ClassificationResponse::Pipeline {
            labels: vec!["has_action_verb".to_string()],
            scores: vec![],
        };
        assert!(LabelScores::from_response(response).is_err());
    }

    // ==================== Threshold Tests ====================

    #[test]
    fn test_checks_threshold_is_strict() {
        let scores = LabelScores {
            action_verb: 0.51,
            task_description: 0.5,
            quantification: 0.99,
        };
        let checks = scores.checks(0.5);
        assert!(checks.action_verb);
        assert!(!checks.task_description);
        assert!(checks.quantification);
    }

    // ==================== Error Classification Tests ====================

    #[test]
    fn test_retryable_statuses() {
        let api = |status| ClassifierError::Api {
            status,
            body: String::new(),
        };
        assert!(api(429).is_retryable());
        assert!(api(500).is_retryable());
        assert!(api(503).is_retryable());
        assert!(!api(400).is_retryable());
        assert!(!api(401).is_retryable());
        assert!(!api(404).is_retryable());
    }

    // ==================== HTTP Tests ====================

    #[tokio::test]
    async fn test_validate_passes_when_all_scores_high() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/models/zero-shot"))
            .and(header("Authorization", "Bearer hf_test"))
            .and(body_partial_json(serde_json::json!({
                "inputs": GOOD_SENTENCE,
                "parameters": {"multi_label": true}
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(pipeline_response(0.92, 0.81, 0.97)),
            )
            .expect(1)
            .mount(&server)
            .await;

        let validator = create_validator(&server, Some("hf_test"));
        let result = validator.validate(GOOD_SENTENCE, Language::ENGLISH).await;

        assert!(result.passed());
        assert_eq!(result.feedback, Language::ENGLISH.pack().feedback_good);
    }

    #[tokio::test]
    async fn test_validate_needs_work_lists_low_labels() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(pipeline_response(0.9, 0.8, 0.1)),
            )
            .mount(&server)
            .await;

        let validator = create_validator(&server, None);
        let result = validator
            .validate("Managed the team across several projects", Language::ENGLISH)
            .await;

        let pack = Language::ENGLISH.pack();
        assert_eq!(result.verdict, Verdict::NeedsWork);
        assert!(result.feedback.contains(pack.hint_quantification));
        assert!(!result.feedback.contains(pack.hint_action_verb));
    }

    #[tokio::test]
    async fn test_validate_short_text_skips_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let validator = create_validator(&server, None);
        let result = validator.validate("hi", Language::INDONESIAN).await;

        assert_eq!(result.verdict, Verdict::InvalidInput);
        assert_eq!(result.feedback, Language::INDONESIAN.pack().invalid_input);
    }

    #[tokio::test]
    async fn test_server_error_is_retried_then_needs_work() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Model is loading"))
            .expect(2)
            .mount(&server)
            .await;

        let validator = create_validator(&server, None);
        let result = validator.validate(GOOD_SENTENCE, Language::ENGLISH).await;

        assert_eq!(result.verdict, Verdict::NeedsWork);
        assert_eq!(result.feedback, Language::ENGLISH.pack().feedback_needs_work);
    }

    #[tokio::test]
    async fn test_single_attempt_sends_one_request_on_server_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(503).set_body_string("Model is loading"))
            .expect(1)
            .mount(&server)
            .await;

        let validator = create_validator(&server, None).with_retry(RetryConfig::single_attempt());
        let err = validator.classify(GOOD_SENTENCE).await.unwrap_err();

        assert!(matches!(err, ClassifierError::Api { status: 503, .. }));
    }

    #[tokio::test]
    async fn test_client_error_is_not_retried() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(401).set_body_string("Invalid token"))
            .expect(1)
            .mount(&server)
            .await;

        let validator = create_validator(&server, Some("bad"));
        let err = validator.classify(GOOD_SENTENCE).await.unwrap_err();

        assert!(matches!(err, ClassifierError::Api { status: 401, .. }));
        assert!(err.to_string().contains("Invalid token"));
    }

    #[tokio::test]
    async fn test_unparsable_body_is_needs_work() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .expect(1)
            .mount(&server)
            .await;

        let validator = create_validator(&server, None);
        let result = validator.validate(GOOD_SENTENCE, Language::ENGLISH).await;

        assert_eq!(result.verdict, Verdict::NeedsWork);
    }
}
