//! Domain error types

use super::error_kind::ErrorKind;
use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Invalid question: {0}")]
    InvalidQuestion(String),

    #[error("Invalid knowledge record: {0}")]
    InvalidRecord(String),

    #[error("Invalid policy: {0}")]
    InvalidPolicy(String),
}

/// A failure tagged with the [`ErrorKind`] it should be reported as.
///
/// Anything raised through the pipeline that is not (and does not wrap)
/// a `HelpdeskError` is classified as [`ErrorKind::Unknown`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{kind}: {message}")]
pub struct HelpdeskError {
    pub kind: ErrorKind,
    pub message: String,
}

impl HelpdeskError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    pub fn no_input(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::NoInput, message)
    }

    pub fn timeout(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Timeout, message)
    }
}
