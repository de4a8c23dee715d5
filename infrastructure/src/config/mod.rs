//! Configuration file loading for voice-helpdesk
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `HELPDESK_*` environment variables (`__` separates sections)
//! 2. `--config <path>` specified file
//! 3. Project root: `./helpdesk.toml` or `./.helpdesk.toml`
//! 4. Global: `$XDG_CONFIG_HOME/voice-helpdesk/config.toml`
//! 5. Default values

mod error;
mod file_config;
mod loader;

pub use error::ConfigError;

pub use file_config::{
    DEFAULT_MODEL_ID, DEFAULT_OBJECT_KEY, FileAwsConfig, FileCallConfig, FileConfig,
    FileEscalationConfig, FileGenerationConfig, FileKnowledgeConfig, FileLoggingConfig,
    FileMetricsConfig, FileOutputConfig, PLACEHOLDER_KNOWLEDGE_BASE_ID,
};
pub use loader::{ConfigLoader, ENV_PREFIX};
