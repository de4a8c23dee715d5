//! Configuration issues detected at startup.

use crate::core::severity::Severity;

/// Identifies a specific configuration issue.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfigIssueCode {
    /// A numeric value is outside its allowed range.
    OutOfRange { field: String, value: f64 },
    /// The knowledge base id is the deployment placeholder and is ignored.
    PlaceholderKnowledgeBase,
    /// Neither a bucket nor a local file is configured for Q&A records.
    NoKnowledgeStore,
}

/// A detected issue in the configuration.
#[derive(Debug, Clone)]
pub struct ConfigIssue {
    pub severity: Severity,
    pub code: ConfigIssueCode,
    pub message: String,
}

impl ConfigIssue {
    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}
