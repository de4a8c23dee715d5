//! AWS Bedrock providers
//!
//! - [`BedrockAnswerGenerator`]: Converse API, implements `AnswerGenerator`
//! - [`BedrockKnowledgeRetriever`]: Knowledge Bases `Retrieve`, implements `KnowledgeRetriever`

mod generator;
mod knowledge_base;
mod types;

pub use generator::BedrockAnswerGenerator;
pub use knowledge_base::BedrockKnowledgeRetriever;
