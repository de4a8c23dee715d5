//! Infrastructure layer for voice-helpdesk
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading.

pub mod config;
pub mod knowledge;
pub mod metrics;
pub mod providers;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, FileAwsConfig, FileCallConfig, FileConfig, FileEscalationConfig,
    FileGenerationConfig, FileKnowledgeConfig, FileLoggingConfig, FileMetricsConfig,
    FileOutputConfig,
};
pub use knowledge::{JsonFileKnowledgeStore, parse_records};
pub use metrics::{JsonlMetricsSink, METRICS_NAMESPACE};

#[cfg(feature = "aws")]
pub use knowledge::S3KnowledgeStore;
#[cfg(feature = "aws")]
pub use providers::bedrock::{BedrockAnswerGenerator, BedrockKnowledgeRetriever};
#[cfg(feature = "aws")]
pub use providers::load_sdk_config;
