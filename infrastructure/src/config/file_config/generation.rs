//! Generation and escalation configuration from TOML
//! (`[generation]` and `[escalation]` sections)

use helpdesk_domain::{EscalationPolicy, TokenPricing};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-5-sonnet-20241022-v2:0";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGenerationConfig {
    /// Model used for escalated questions
    pub model_id: String,
    /// Max tokens per generated answer (default: 500)
    pub max_tokens: i32,
    /// Sampling temperature (default: 0.7)
    pub temperature: f32,
    /// USD per 1000 input tokens for the cost estimate; 0 disables it
    pub input_price_per_1k: f64,
    /// USD per 1000 output tokens for the cost estimate; 0 disables it
    pub output_price_per_1k: f64,
}

impl Default for FileGenerationConfig {
    fn default() -> Self {
        Self {
            model_id: DEFAULT_MODEL_ID.to_string(),
            max_tokens: 500,
            temperature: 0.7,
            input_price_per_1k: 0.003,
            output_price_per_1k: 0.015,
        }
    }
}

impl FileGenerationConfig {
    pub fn pricing(&self) -> TokenPricing {
        TokenPricing::new(self.input_price_per_1k, self.output_price_per_1k)
    }
}

/// Escalation thresholds. Missing fields take the policy defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileEscalationConfig {
    pub confidence_threshold: Option<f64>,
    pub generated_confidence: Option<f64>,
    pub fallback_confidence: Option<f64>,
}

impl FileEscalationConfig {
    pub fn to_policy(&self) -> EscalationPolicy {
        let mut policy = EscalationPolicy::default();
        if let Some(threshold) = self.confidence_threshold {
            policy = policy.with_confidence_threshold(threshold);
        }
        if let Some(confidence) = self.generated_confidence {
            policy = policy.with_generated_confidence(confidence);
        }
        if let Some(confidence) = self.fallback_confidence {
            policy = policy.with_fallback_confidence(confidence);
        }
        policy
    }
}
