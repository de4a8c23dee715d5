//! Runtime configuration from TOML
//! (`[aws]`, `[call]`, `[metrics]`, `[output]` and `[logging]` sections)

use helpdesk_domain::OutputFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileAwsConfig {
    /// AWS region. Unset falls back to the SDK's default chain.
    pub region: Option<String>,
    /// AWS profile name for credentials
    pub profile: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCallConfig {
    /// Deadline for one inquiry in seconds; 0 disables it (default: 8)
    pub timeout_secs: u64,
}

impl Default for FileCallConfig {
    fn default() -> Self {
        Self { timeout_secs: 8 }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileMetricsConfig {
    /// Value of the `Environment` dimension (default: "unknown")
    pub environment: String,
    /// JSONL file metric events are appended to; unset disables metrics.
    pub jsonl_path: Option<PathBuf>,
}

impl Default for FileMetricsConfig {
    fn default() -> Self {
        Self {
            environment: "unknown".to_string(),
            jsonl_path: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Default output format when `--output` is not given
    pub format: Option<OutputFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileLoggingConfig {
    /// Default filter directive when neither `-v` nor `RUST_LOG` is given
    pub level: Option<String>,
}
