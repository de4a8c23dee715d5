//! Knowledge retriever port
//!
//! Managed semantic search returning ranked passages for a query.

use super::capability::CapabilityError;
use async_trait::async_trait;

/// A ranked passage returned by the retrieval capability.
#[derive(Debug, Clone, PartialEq)]
pub struct RetrievedPassage {
    pub text: String,
    /// Relevance score as reported by the service, used directly as confidence.
    pub score: f64,
}

impl RetrievedPassage {
    pub fn new(text: impl Into<String>, score: f64) -> Self {
        Self {
            text: text.into(),
            score,
        }
    }
}

/// Managed retrieval capability: `retrieve(query, k) -> ranked passages`.
#[async_trait]
pub trait KnowledgeRetriever: Send + Sync {
    /// Return up to `k` passages, best first.
    async fn retrieve(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<RetrievedPassage>, CapabilityError>;
}
