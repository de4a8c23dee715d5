//! Application layer for voice-helpdesk
//!
//! This crate contains use cases, port definitions, and application configuration.
//! It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ExecutionParams;
pub use ports::{
    answer_generator::{AnswerGenerator, Generation},
    capability::CapabilityError,
    knowledge_retriever::{KnowledgeRetriever, RetrievedPassage},
    knowledge_store::KnowledgeStore,
    metrics_sink::{MetricsSink, NoMetrics},
};
pub use use_cases::answer_question::AnswerQuestionUseCase;
pub use use_cases::classify_error::ErrorClassifier;
pub use use_cases::handle_inquiry::{
    HandleInquiryUseCase, InquiryError, InquiryInput, InquiryOutput, UNKNOWN_CALLER,
};
pub use use_cases::resolve_knowledge::{DEFAULT_TOP_K, KnowledgeResolver};
pub use use_cases::shared::{best_effort, record_metric};
