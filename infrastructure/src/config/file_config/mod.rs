//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and converted to domain/application
//! types once at startup.

mod generation;
mod knowledge;
mod runtime;

pub use generation::{DEFAULT_MODEL_ID, FileEscalationConfig, FileGenerationConfig};
pub use knowledge::{DEFAULT_OBJECT_KEY, FileKnowledgeConfig, PLACEHOLDER_KNOWLEDGE_BASE_ID};
pub use runtime::{
    FileAwsConfig, FileCallConfig, FileLoggingConfig, FileMetricsConfig, FileOutputConfig,
};

use helpdesk_application::ExecutionParams;
use helpdesk_domain::{ConfigIssue, ConfigIssueCode, Severity};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Knowledge sources
    pub knowledge: FileKnowledgeConfig,
    /// Generative fallback
    pub generation: FileGenerationConfig,
    /// Escalation thresholds
    pub escalation: FileEscalationConfig,
    /// AWS credentials and region
    pub aws: FileAwsConfig,
    /// Per-call settings
    pub call: FileCallConfig,
    /// Quality metrics
    pub metrics: FileMetricsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Logging
    pub logging: FileLoggingConfig,
}

impl FileConfig {
    /// Execution parameters derived from `[knowledge]` and `[call]`.
    pub fn to_execution_params(&self) -> ExecutionParams {
        let timeout = match self.call.timeout_secs {
            0 => None,
            secs => Some(Duration::from_secs(secs)),
        };
        ExecutionParams::default()
            .with_retrieval_top_k(self.knowledge.top_k)
            .with_call_timeout(timeout)
    }

    /// Validate the entire configuration, returning all detected issues.
    ///
    /// Checks:
    /// 1. Escalation values outside `[0, 1]`
    /// 2. Generation temperature outside `[0, 1]`, non-positive max tokens, negative prices
    /// 3. `top_k == 0`
    /// 4. Placeholder knowledge base id
    /// 5. No record source at all
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Escalation policy ranges
        let policy = self.escalation.to_policy();
        let ranged = [
            ("escalation.confidence_threshold", policy.confidence_threshold),
            ("escalation.generated_confidence", policy.generated_confidence),
            ("escalation.fallback_confidence", policy.fallback_confidence),
            (
                "generation.temperature",
                f64::from(self.generation.temperature),
            ),
        ];
        for (field, value) in ranged {
            if !(0.0..=1.0).contains(&value) {
                issues.push(out_of_range(field, value, "must be within [0, 1]"));
            }
        }

        // 2. Counts
        if self.generation.max_tokens <= 0 {
            issues.push(out_of_range(
                "generation.max_tokens",
                f64::from(self.generation.max_tokens),
                "must be positive",
            ));
        }
        for (field, value) in [
            ("generation.input_price_per_1k", self.generation.input_price_per_1k),
            ("generation.output_price_per_1k", self.generation.output_price_per_1k),
        ] {
            if value < 0.0 {
                issues.push(out_of_range(field, value, "must not be negative"));
            }
        }
        if self.knowledge.top_k == 0 {
            issues.push(out_of_range("knowledge.top_k", 0.0, "must be at least 1"));
        }

        // 3. Placeholder id
        if self.knowledge.is_placeholder() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::PlaceholderKnowledgeBase,
                message: format!(
                    "knowledge.knowledge_base_id is '{PLACEHOLDER_KNOWLEDGE_BASE_ID}', \
                     managed retrieval is disabled"
                ),
            });
        }

        // 4. Record source
        if self.knowledge.bucket().is_none() && self.knowledge.local_path.is_none() {
            issues.push(ConfigIssue {
                severity: Severity::Warning,
                code: ConfigIssueCode::NoKnowledgeStore,
                message: "neither knowledge.bucket nor knowledge.local_path is set, \
                          local matching will report not_configured"
                    .to_string(),
            });
        }

        issues
    }
}

fn out_of_range(field: &str, value: f64, rule: &str) -> ConfigIssue {
    ConfigIssue {
        severity: Severity::Error,
        code: ConfigIssueCode::OutOfRange {
            field: field.to_string(),
            value,
        },
        message: format!("{field}: {rule}, got {value}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[knowledge]
knowledge_base_id = "KB12345"
bucket = "helpdesk-knowledge-prod"
top_k = 5

[generation]
model_id = "anthropic.claude-3-haiku-20240307-v1:0"
max_tokens = 300

[escalation]
confidence_threshold = 0.6

[aws]
region = "ap-northeast-1"

[call]
timeout_secs = 5

[metrics]
environment = "prod"
jsonl_path = "/var/log/helpdesk/metrics.jsonl"

[output]
format = "text"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.knowledge.knowledge_base_id(), Some("KB12345"));
        assert_eq!(config.knowledge.bucket(), Some("helpdesk-knowledge-prod"));
        assert_eq!(config.knowledge.object_key, DEFAULT_OBJECT_KEY);
        assert_eq!(config.generation.max_tokens, 300);
        assert_eq!(config.generation.temperature, 0.7);
        assert_eq!(config.escalation.to_policy().confidence_threshold, 0.6);
        assert_eq!(config.aws.region.as_deref(), Some("ap-northeast-1"));
        assert_eq!(config.metrics.environment, "prod");
        assert_eq!(config.output.format, Some(OutputFormat::Text));

        let params = config.to_execution_params();
        assert_eq!(params.retrieval_top_k, 5);
        assert_eq!(params.call_timeout, Some(Duration::from_secs(5)));

        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_default_config() {
        let config = FileConfig::default();
        assert!(config.knowledge.knowledge_base_id().is_none());
        assert_eq!(config.generation.model_id, DEFAULT_MODEL_ID);
        assert_eq!(config.call.timeout_secs, 8);
        assert_eq!(config.metrics.environment, "unknown");
        assert_eq!(config.to_execution_params(), ExecutionParams::default());
    }

    #[test]
    fn test_zero_timeout_disables_deadline() {
        let config: FileConfig = toml::from_str("[call]\ntimeout_secs = 0\n").unwrap();
        assert!(config.to_execution_params().call_timeout.is_none());
    }

    #[test]
    fn test_validate_default_only_warns_about_store() {
        let issues = FileConfig::default().validate();
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].code, ConfigIssueCode::NoKnowledgeStore);
        assert!(!issues[0].is_error());
    }

    #[test]
    fn test_validate_reports_ranges_and_placeholder() {
        let toml_str = r#"
[knowledge]
knowledge_base_id = "debug-placeholder"
local_path = "qa.json"
top_k = 0

[generation]
output_price_per_1k = -0.01

[escalation]
confidence_threshold = 1.5
"#;
        let config: FileConfig = toml::from_str(toml_str).unwrap();
        let issues = config.validate();

        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::OutOfRange { field, .. } if field == "escalation.confidence_threshold"
        )));
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::OutOfRange { field, .. } if field == "knowledge.top_k"
        )));
        assert!(
            issues
                .iter()
                .any(|i| i.code == ConfigIssueCode::PlaceholderKnowledgeBase && !i.is_error())
        );
        assert!(issues.iter().any(|i| matches!(
            &i.code,
            ConfigIssueCode::OutOfRange { field, .. } if field == "generation.output_price_per_1k"
        )));
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 3);
    }
}
