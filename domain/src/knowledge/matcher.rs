//! Local keyword matcher
//!
//! Cheap, deterministic fallback used when no managed retrieval capability
//! answers. Scoring per record, against the lower-cased query:
//!
//! | Signal | Score |
//! |--------|-------|
//! | each keyword contained in the query | +1.0 |
//! | the record's question contained in the query | +2.0 |
//!
//! The first record with the strictly highest score wins, and confidence
//! is `min(score / 3.0, 1.0)`.

use super::record::QaRecord;
use crate::resolution::match_result::MatchResult;

/// Score contributed by each matching keyword.
pub const KEYWORD_SCORE: f64 = 1.0;
/// Score contributed when the whole record question appears in the query.
pub const QUESTION_SCORE: f64 = 2.0;
/// Raw score that maps to full confidence.
pub const SCORE_NORMALIZER: f64 = 3.0;

/// Keyword + substring scorer over a record snapshot.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalMatcher;

impl LocalMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Raw score of `record` against an already lower-cased query.
    pub fn score(&self, query_lower: &str, record: &QaRecord) -> f64 {
        let keyword_hits = record
            .keywords
            .iter()
            .filter(|keyword| query_lower.contains(&keyword.to_lowercase()))
            .count();

        let mut score = keyword_hits as f64 * KEYWORD_SCORE;
        if query_lower.contains(&record.question.to_lowercase()) {
            score += QUESTION_SCORE;
        }
        score
    }

    /// Find the best record for `question`.
    ///
    /// Returns [`MatchResult::not_found`] when no record scores above zero.
    pub fn find_match(&self, question: &str, records: &[QaRecord]) -> MatchResult {
        let query_lower = question.to_lowercase();

        let mut best: Option<(&QaRecord, f64)> = None;
        for record in records {
            let score = self.score(&query_lower, record);
            let is_better = match best {
                Some((_, best_score)) => score > best_score,
                None => score > 0.0,
            };
            if is_better {
                best = Some((record, score));
            }
        }

        match best {
            Some((record, score)) => MatchResult::new(
                record.answer.clone(),
                (score / SCORE_NORMALIZER).min(1.0),
                record.category.clone(),
            ),
            None => MatchResult::not_found(),
        }
    }
}
