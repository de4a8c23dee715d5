//! Knowledge record-set validation.
//!
//! Checks the invariants the matcher relies on before a record set is
//! published: unique non-empty ids, non-empty questions and answers, and
//! bounded answer length.

use super::record::{MAX_ANSWER_CHARS, QaRecord};
use crate::core::severity::Severity;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};

/// A single problem found in a record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssue {
    pub severity: Severity,
    /// Position of the offending record, if the issue is local to one.
    pub index: Option<usize>,
    pub message: String,
}

impl RecordIssue {
    fn error(index: Option<usize>, message: String) -> Self {
        Self {
            severity: Severity::Error,
            index,
            message,
        }
    }

    fn warning(index: Option<usize>, message: String) -> Self {
        Self {
            severity: Severity::Warning,
            index,
            message,
        }
    }
}

/// Summary figures for a record set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct KnowledgeStats {
    pub total_items: usize,
    pub categories: Vec<String>,
    pub total_keywords: usize,
}

/// Result of [`validate_records`].
#[derive(Debug, Clone, Default, Serialize)]
pub struct KnowledgeReport {
    pub issues: Vec<RecordIssue>,
    pub stats: KnowledgeStats,
}

impl KnowledgeReport {
    /// `true` when no error-severity issue was found.
    pub fn is_valid(&self) -> bool {
        self.errors().next().is_none()
    }

    pub fn errors(&self) -> impl Iterator<Item = &RecordIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Error)
    }

    pub fn warnings(&self) -> impl Iterator<Item = &RecordIssue> {
        self.issues
            .iter()
            .filter(|issue| issue.severity == Severity::Warning)
    }
}

/// Validate a record set.
pub fn validate_records(records: &[QaRecord]) -> KnowledgeReport {
    let mut issues = Vec::new();
    let mut id_counts: HashMap<&str, usize> = HashMap::new();

    for (idx, record) in records.iter().enumerate() {
        if record.id.trim().is_empty() {
            issues.push(RecordIssue::error(
                Some(idx),
                format!("Item {idx}: empty 'id'"),
            ));
        }
        if record.question.trim().is_empty() {
            issues.push(RecordIssue::error(
                Some(idx),
                format!("Item {idx}: empty 'question'"),
            ));
        }
        if record.answer.trim().is_empty() {
            issues.push(RecordIssue::error(
                Some(idx),
                format!("Item {idx}: empty 'answer'"),
            ));
        }

        let answer_chars = record.answer.chars().count();
        if answer_chars > MAX_ANSWER_CHARS {
            issues.push(RecordIssue::warning(
                Some(idx),
                format!(
                    "Item {idx}: answer exceeds {MAX_ANSWER_CHARS} characters ({answer_chars})"
                ),
            ));
        }

        // An empty keyword is a substring of every query
        if record.keywords.iter().any(|k| k.trim().is_empty()) {
            issues.push(RecordIssue::warning(
                Some(idx),
                format!("Item {idx}: blank keyword matches every question"),
            ));
        }

        *id_counts.entry(record.id.as_str()).or_default() += 1;
    }

    let duplicates: BTreeSet<&str> = id_counts
        .into_iter()
        .filter(|(_, count)| *count > 1)
        .map(|(id, _)| id)
        .collect();
    if !duplicates.is_empty() {
        let list = duplicates.into_iter().collect::<Vec<_>>().join(", ");
        issues.push(RecordIssue::error(
            None,
            format!("Duplicate IDs found: {list}"),
        ));
    }

    let categories: BTreeSet<String> = records.iter().map(|r| r.category.clone()).collect();

    KnowledgeReport {
        issues,
        stats: KnowledgeStats {
            total_items: records.len(),
            categories: categories.into_iter().collect(),
            total_keywords: records.iter().map(|r| r.keywords.len()).sum(),
        },
    }
}
