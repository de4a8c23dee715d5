//! Answer produced by the escalation step

use super::match_result::MatchResult;
use serde::{Deserialize, Serialize};

/// Which path produced an [`Answer`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerSource {
    /// Knowledge match accepted.
    Resolved,
    /// Escalated; the generative capability answered.
    Generated,
    /// Escalated; generation failed and the fixed apology was used.
    GenerationFailed,
}

impl AnswerSource {
    pub fn is_escalated(&self) -> bool {
        !matches!(self, AnswerSource::Resolved)
    }
}

/// Final `(answer, confidence, category)` of a resolution attempt.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub confidence: f64,
    pub category: String,
    pub source: AnswerSource,
}

impl Answer {
    pub fn resolved(result: MatchResult) -> Self {
        Self {
            text: result.answer,
            confidence: result.confidence,
            category: result.category,
            source: AnswerSource::Resolved,
        }
    }

    pub fn generated(text: impl Into<String>, confidence: f64, category: &str) -> Self {
        Self {
            text: text.into(),
            confidence,
            category: category.to_string(),
            source: AnswerSource::Generated,
        }
    }

    pub fn generation_failed(text: impl Into<String>, confidence: f64, category: &str) -> Self {
        Self {
            text: text.into(),
            confidence,
            category: category.to_string(),
            source: AnswerSource::GenerationFailed,
        }
    }
}
