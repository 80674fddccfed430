//! Validation metrics and observability.
//!
//! Counts verdicts and classifier traffic for the lifetime of the process.
//! The console logs a report when a chat ends.

use super::Verdict;
use serde::Serialize;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

/// Global validation metrics singleton.
pub struct ValidationMetrics {
    passed: AtomicUsize,
    needs_work: AtomicUsize,
    invalid_input: AtomicUsize,

    /// Requests sent to the zero-shot classifier (after retries)
    classifier_calls: AtomicUsize,

    /// Classifier requests that ended in an error
    classifier_failures: AtomicUsize,
}

static METRICS: OnceLock<ValidationMetrics> = OnceLock::new();

impl ValidationMetrics {
    pub fn global() -> &'static ValidationMetrics {
        METRICS.get_or_init(|| ValidationMetrics {
            passed: AtomicUsize::new(0),
            needs_work: AtomicUsize::new(0),
            invalid_input: AtomicUsize::new(0),
            classifier_calls: AtomicUsize::new(0),
            classifier_failures: AtomicUsize::new(0),
        })
    }

    pub fn record_verdict(&self, verdict: Verdict) {
        let counter = match verdict {
            Verdict::Passed => &self.passed,
            Verdict::NeedsWork => &self.needs_work,
            Verdict::InvalidInput => &self.invalid_input,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_classifier_call(&self) {
        self.classifier_calls.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_classifier_failure(&self) {
        self.classifier_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn report(&self) -> MetricsReport {
        let passed = self.passed.load(Ordering::Relaxed);
        let needs_work = self.needs_work.load(Ordering::Relaxed);
        let invalid_input = self.invalid_input.load(Ordering::Relaxed);
        let total = passed + needs_work + invalid_input;
        let pass_rate = if total > 0 {
            (passed as f64 / total as f64) * 100.0
        } else {
            0.0
        };

        MetricsReport {
            validations: total,
            passed,
            needs_work,
            invalid_input,
            pass_rate,
            classifier_calls: self.classifier_calls.load(Ordering::Relaxed),
            classifier_failures: self.classifier_failures.load(Ordering::Relaxed),
        }
    }
}

/// Point-in-time snapshot of the counters
#[derive(Debug, Clone, Serialize)]
pub struct MetricsReport {
    pub validations: usize,
    pub passed: usize,
    pub needs_work: usize,
    pub invalid_input: usize,
    /// Percentage of validations that passed
    pub pass_rate: f64,
    pub classifier_calls: usize,
    pub classifier_failures: usize,
}
