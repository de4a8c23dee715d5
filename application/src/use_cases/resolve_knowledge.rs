//! Knowledge resolver
//!
//! Resolves a question to a [`MatchResult`] from the available knowledge
//! sources, in order:
//!
//! 1. Managed retrieval (if a [`KnowledgeRetriever`] is wired): top passage, category `knowledge_base`
//! 2. [`LocalMatcher`] over the records from the [`KnowledgeStore`]
//!
//! Capability failures never escape: they are logged and downgraded to a
//! zero-confidence result.

use crate::ports::knowledge_retriever::KnowledgeRetriever;
use crate::ports::knowledge_store::KnowledgeStore;
use crate::ports::metrics_sink::{MetricsSink, NoMetrics};
use crate::use_cases::shared::record_metric;
use helpdesk_domain::{KnowledgeBaseMetrics, LocalMatcher, MatchResult, category, preview};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Default number of passages requested from the retrieval capability.
pub const DEFAULT_TOP_K: usize = 3;

/// Orchestrates managed retrieval and the local fallback matcher.
#[derive(Clone)]
pub struct KnowledgeResolver {
    retriever: Option<Arc<dyn KnowledgeRetriever>>,
    store: Option<Arc<dyn KnowledgeStore>>,
    matcher: LocalMatcher,
    top_k: usize,
    metrics: Arc<dyn MetricsSink>,
}

impl KnowledgeResolver {
    /// Create a resolver over an optional record store.
    pub fn new(store: Option<Arc<dyn KnowledgeStore>>) -> Self {
        Self {
            retriever: None,
            store,
            matcher: LocalMatcher::new(),
            top_k: DEFAULT_TOP_K,
            metrics: Arc::new(NoMetrics),
        }
    }

    /// Use a managed retrieval capability before the local matcher.
    pub fn with_retriever(mut self, retriever: Arc<dyn KnowledgeRetriever>) -> Self {
        self.retriever = Some(retriever);
        self
    }

    /// Set the number of passages requested from the retriever.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Create with a metrics sink.
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsSink>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn has_retriever(&self) -> bool {
        self.retriever.is_some()
    }

    /// Resolve `question` to a match. Never fails.
    pub async fn resolve(&self, question: &str) -> MatchResult {
        if let Some(retriever) = &self.retriever
            && let Some(result) = self.retrieve(retriever.as_ref(), question).await
        {
            return result;
        }

        self.match_locally(question).await
    }

    /// Managed retrieval path. `None` means "no result": either the
    /// capability failed or it returned nothing.
    async fn retrieve(
        &self,
        retriever: &dyn KnowledgeRetriever,
        question: &str,
    ) -> Option<MatchResult> {
        let started = Instant::now();
        let passages = match retriever.retrieve(question, self.top_k).await {
            Ok(passages) => passages,
            Err(e) => {
                // Auth and configuration failures land here too
                warn!(error = %e, "Knowledge base retrieval failed, falling back to local records");
                return None;
            }
        };

        record_metric(
            self.metrics.as_ref(),
            &KnowledgeBaseMetrics {
                search_time: started.elapsed(),
                result_count: passages.len(),
                top_score: passages.first().map(|p| p.score).unwrap_or(0.0),
            },
        );

        let Some(top) = passages.into_iter().next() else {
            debug!("Knowledge base returned no passages");
            return None;
        };

        info!(
            confidence = top.score,
            "Found answer in knowledge base: {}",
            preview(&top.text, 60)
        );
        Some(MatchResult::new(
            top.text,
            top.score,
            category::KNOWLEDGE_BASE,
        ))
    }

    /// Local matcher path over a fresh record snapshot.
    async fn match_locally(&self, question: &str) -> MatchResult {
        let Some(store) = &self.store else {
            info!("Knowledge store not configured");
            return MatchResult::not_configured();
        };

        let records = match store.load_records().await {
            Ok(records) => records,
            Err(e) => {
                warn!(error = %e, "Could not load knowledge records");
                return MatchResult::not_configured();
            }
        };

        let result = self.matcher.find_match(question, &records);
        debug!(
            records = records.len(),
            confidence = result.confidence,
            category = %result.category,
            "Local match complete"
        );
        result
    }
}
