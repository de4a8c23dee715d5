//! Shared utilities for use cases.
//!
//! Contains the best-effort side-effect policy: a side effect that is not
//! part of the answer (metrics, history) is attempted once, a failure is
//! logged, and the caller's result is never affected.

use crate::ports::metrics_sink::MetricsSink;
use helpdesk_domain::MetricEvent;
use std::fmt::Display;
use tracing::warn;

/// Apply the best-effort policy to the result of a side effect.
pub fn best_effort<E: Display>(action: &str, result: Result<(), E>) {
    if let Err(e) = result {
        warn!(action, error = %e, "Best-effort side effect failed");
    }
}

/// Record a metric event under the best-effort policy.
///
/// Empty events are skipped.
pub fn record_metric(sink: &dyn MetricsSink, event: impl Into<MetricEvent>) {
    let event = event.into();
    if event.is_empty() {
        return;
    }
    best_effort(event.event_type, sink.record(&event));
}

#[cfg(test)]
pub(crate) mod test_support {
    //! Mock ports shared by the use case tests.

    use crate::ports::answer_generator::{AnswerGenerator, Generation};
    use crate::ports::capability::CapabilityError;
    use crate::ports::knowledge_retriever::{KnowledgeRetriever, RetrievedPassage};
    use crate::ports::knowledge_store::KnowledgeStore;
    use crate::ports::metrics_sink::MetricsSink;
    use async_trait::async_trait;
    use helpdesk_domain::{MetricEvent, QaRecord, TokenUsage};
    use std::sync::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    pub struct MockStore {
        records: Option<Vec<QaRecord>>,
        pub calls: AtomicUsize,
    }

    impl MockStore {
        pub fn with_records(records: Vec<QaRecord>) -> Self {
            Self {
                records: Some(records),
                calls: AtomicUsize::new(0),
            }
        }

        pub fn unreachable() -> Self {
            Self {
                records: None,
                calls: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl KnowledgeStore for MockStore {
        async fn load_records(&self) -> Result<Vec<QaRecord>, CapabilityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.records
                .clone()
                .ok_or_else(|| CapabilityError::Unavailable("bucket not reachable".to_string()))
        }
    }

    pub struct MockRetriever {
        passages: Result<Vec<RetrievedPassage>, String>,
        pub calls: AtomicUsize,
        pub last_k: AtomicUsize,
    }

    impl MockRetriever {
        pub fn with_passages(passages: Vec<RetrievedPassage>) -> Self {
            Self {
                passages: Ok(passages),
                calls: AtomicUsize::new(0),
                last_k: AtomicUsize::new(0),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                passages: Err(message.to_string()),
                calls: AtomicUsize::new(0),
                last_k: AtomicUsize::new(0),
            }
        }
    }

    #[async_trait]
    impl KnowledgeRetriever for MockRetriever {
        async fn retrieve(
            &self,
            _query: &str,
            k: usize,
        ) -> Result<Vec<RetrievedPassage>, CapabilityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.last_k.store(k, Ordering::SeqCst);
            self.passages
                .clone()
                .map_err(CapabilityError::RequestFailed)
        }
    }

    pub struct MockGenerator {
        reply: Result<String, String>,
        usage: Option<TokenUsage>,
        delay: Option<Duration>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl MockGenerator {
        pub fn replying(text: &str) -> Self {
            Self {
                reply: Ok(text.to_string()),
                usage: None,
                delay: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                usage: None,
                delay: None,
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn with_usage(mut self, usage: TokenUsage) -> Self {
            self.usage = Some(usage);
            self
        }

        pub fn with_delay(mut self, delay: Duration) -> Self {
            self.delay = Some(delay);
            self
        }

        pub fn call_count(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl AnswerGenerator for MockGenerator {
        fn model_id(&self) -> &str {
            "mock-model"
        }

        async fn generate(&self, prompt: &str) -> Result<Generation, CapabilityError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            if let Some(delay) = self.delay {
                tokio::time::sleep(delay).await;
            }
            let text = self.reply.clone().map_err(CapabilityError::RequestFailed)?;
            Ok(Generation {
                text,
                usage: self.usage,
            })
        }
    }

    #[derive(Default)]
    pub struct RecordingMetrics {
        pub events: Mutex<Vec<MetricEvent>>,
    }

    impl RecordingMetrics {
        pub fn event_types(&self) -> Vec<&'static str> {
            self.events
                .lock()
                .unwrap()
                .iter()
                .map(|e| e.event_type)
                .collect()
        }
    }

    impl MetricsSink for RecordingMetrics {
        fn record(&self, event: &MetricEvent) -> Result<(), CapabilityError> {
            self.events.lock().unwrap().push(event.clone());
            Ok(())
        }
    }

    pub struct FailingMetrics;

    impl MetricsSink for FailingMetrics {
        fn record(&self, _event: &MetricEvent) -> Result<(), CapabilityError> {
            Err(CapabilityError::Unavailable(
                "metrics backend down".to_string(),
            ))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::test_support::{FailingMetrics, RecordingMetrics};
    use super::*;
    use helpdesk_domain::KnowledgeBaseMetrics;
    use std::time::Duration;

    #[test]
    fn test_best_effort_swallows_errors() {
        best_effort("write history", Err::<(), _>("disk full"));
        best_effort::<String>("write history", Ok(()));
    }

    #[test]
    fn test_record_metric_forwards_event() {
        let sink = RecordingMetrics::default();
        record_metric(
            &sink,
            &KnowledgeBaseMetrics {
                search_time: Duration::from_millis(5),
                result_count: 2,
                top_score: 0.8,
            },
        );
        assert_eq!(sink.event_types(), vec!["kb_metrics"]);
    }

    #[test]
    fn test_record_metric_never_propagates_failure() {
        record_metric(
            &FailingMetrics,
            &KnowledgeBaseMetrics {
                search_time: Duration::from_millis(5),
                result_count: 0,
                top_score: 0.0,
            },
        );
    }
}
