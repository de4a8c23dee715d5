//! Domain layer for voice-helpdesk
//!
//! This crate contains the core business rules, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Resolution
//!
//! A customer's transcribed [`Question`] is resolved to an answer with a
//! confidence score:
//!
//! - **Knowledge match**: managed retrieval, or the [`LocalMatcher`] over curated [`QaRecord`]s
//! - **Escalation**: below the [`EscalationPolicy`] threshold a generated answer is used instead
//!
//! ## Outcome
//!
//! Every path, including failures, ends in a [`ResolutionOutcome`]. Failures
//! are reported through the closed [`ErrorKind`] table.

pub mod config;
pub mod core;
pub mod knowledge;
pub mod metrics;
pub mod prompt;
pub mod resolution;

// Re-export commonly used types
pub use config::{ConfigIssue, ConfigIssueCode, OutputFormat};
pub use core::{
    error::{DomainError, HelpdeskError},
    error_kind::ErrorKind,
    question::{InputRejection, MAX_QUESTION_CHARS, Question},
    severity::Severity,
    string::preview,
};
pub use knowledge::{
    matcher::LocalMatcher,
    record::QaRecord,
    validation::{KnowledgeReport, KnowledgeStats, RecordIssue, validate_records},
};
pub use metrics::{
    CallMetrics, GenerationMetrics, KnowledgeBaseMetrics, MetricDatum, MetricEvent, MetricUnit,
    TokenPricing, TokenUsage,
};
pub use prompt::PromptTemplate;
pub use resolution::{
    answer::{Answer, AnswerSource},
    category,
    match_result::MatchResult,
    outcome::ResolutionOutcome,
    policy::EscalationPolicy,
};
