//! Resolution outcome: the single shape every request ends in.

use super::answer::Answer;
use super::category;
use crate::core::error_kind::ErrorKind;
use serde::{Deserialize, Serialize};

/// Canonical result of handling one inquiry.
///
/// Degraded answers (e.g. the generation apology) are `error == false`;
/// only outcomes built from an [`ErrorKind`] set `error`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResolutionOutcome {
    pub response: String,
    pub confidence: f64,
    pub category: String,
    pub retry: bool,
    pub error: bool,
}

impl ResolutionOutcome {
    pub fn from_answer(answer: Answer) -> Self {
        Self {
            response: answer.text,
            confidence: answer.confidence,
            category: answer.category,
            retry: false,
            error: false,
        }
    }

    /// Fixed error response for `kind`.
    pub fn from_error_kind(kind: ErrorKind) -> Self {
        Self {
            response: kind.message().to_string(),
            confidence: 0.0,
            category: kind.category(),
            retry: kind.retry(),
            error: true,
        }
    }

    /// Whether an actual answer was delivered, for quality reporting.
    pub fn answer_found(&self) -> bool {
        !self.error && category::is_answer(&self.category)
    }
}
