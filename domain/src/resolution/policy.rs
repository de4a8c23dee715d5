//! Escalation policy
//!
//! Decides when a knowledge match is good enough to return and what
//! confidence the generative fallback reports.

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// Policy constants for the escalation step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EscalationPolicy {
    /// Knowledge matches at or above this confidence are returned as-is.
    pub confidence_threshold: f64,
    /// Confidence reported for generated answers (the model does not self-report one).
    pub generated_confidence: f64,
    /// Confidence reported with the apology when generation fails.
    pub fallback_confidence: f64,
}

impl Default for EscalationPolicy {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.5,
            generated_confidence: 0.7,
            fallback_confidence: 0.3,
        }
    }
}

impl EscalationPolicy {
    pub fn with_confidence_threshold(mut self, threshold: f64) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    pub fn with_generated_confidence(mut self, confidence: f64) -> Self {
        self.generated_confidence = confidence;
        self
    }

    pub fn with_fallback_confidence(mut self, confidence: f64) -> Self {
        self.fallback_confidence = confidence;
        self
    }

    /// Threshold is inclusive on the accepting side.
    pub fn accepts(&self, confidence: f64) -> bool {
        confidence >= self.confidence_threshold
    }

    /// Reject values outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), DomainError> {
        let fields = [
            ("confidence_threshold", self.confidence_threshold),
            ("generated_confidence", self.generated_confidence),
            ("fallback_confidence", self.fallback_confidence),
        ];
        for (name, value) in fields {
            if !(0.0..=1.0).contains(&value) {
                return Err(DomainError::InvalidPolicy(format!(
                    "{name} must be within [0, 1], got {value}"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let policy = EscalationPolicy::default();
        assert_eq!(policy.confidence_threshold, 0.5);
        assert_eq!(policy.generated_confidence, 0.7);
        assert_eq!(policy.fallback_confidence, 0.3);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_threshold_inclusive() {
        let policy = EscalationPolicy::default();
        assert!(policy.accepts(0.5));
        assert!(!policy.accepts(0.49));
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let policy = EscalationPolicy::default().with_confidence_threshold(1.5);
        assert!(matches!(
            policy.validate(),
            Err(DomainError::InvalidPolicy(msg)) if msg.contains("confidence_threshold")
        ));
        assert!(
            EscalationPolicy::default()
                .with_generated_confidence(-0.1)
                .validate()
                .is_err()
        );
    }
}
