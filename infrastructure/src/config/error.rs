//! Configuration loading errors

use thiserror::Error;

/// Errors that prevent the configuration from being used
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to load configuration: {0}")]
    Load(#[from] Box<figment::Error>),

    #[error("invalid configuration: {}", .0.join("; "))]
    Invalid(Vec<String>),
}
