//! Match result value object

use super::category;
use serde::{Deserialize, Serialize};

/// Outcome of a knowledge lookup (Value Object)
///
/// Produced fresh per query. A failed lookup is not an error: it is a
/// result with `confidence == 0.0` and a `not_found` / `not_configured`
/// category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub answer: String,
    pub confidence: f64,
    pub category: String,
}

impl MatchResult {
    pub fn new(answer: impl Into<String>, confidence: f64, category: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            confidence,
            category: category.into(),
        }
    }

    pub fn not_found() -> Self {
        Self::new("", 0.0, category::NOT_FOUND)
    }

    pub fn not_configured() -> Self {
        Self::new("", 0.0, category::NOT_CONFIGURED)
    }

    /// Whether this result carries an answer at all.
    pub fn is_found(&self) -> bool {
        self.confidence > 0.0 && !self.answer.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sentinels() {
        let nf = MatchResult::not_found();
        assert_eq!(nf.category, "not_found");
        assert_eq!(nf.confidence, 0.0);
        assert!(!nf.is_found());

        let nc = MatchResult::not_configured();
        assert_eq!(nc.category, "not_configured");
        assert!(!nc.is_found());
    }

    #[test]
    fn test_found() {
        let m = MatchResult::new("Press F3.", 0.66, "receipt");
        assert!(m.is_found());
    }
}
