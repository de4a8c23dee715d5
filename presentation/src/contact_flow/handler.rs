//! Contact-flow entry point
//!
//! Turns a raw event into a wire response. Nothing escapes as an error:
//! the telephony layer always receives a renderable body.

use super::request::RequestValidator;
use crate::output::formatter::{ResponseFormatter, WireResponse};
use helpdesk_application::{HandleInquiryUseCase, InquiryOutput};
use helpdesk_domain::HelpdeskError;
use serde_json::Value;
use std::time::Instant;
use tracing::{info, warn};

pub struct ContactFlowHandler {
    use_case: HandleInquiryUseCase,
}

impl ContactFlowHandler {
    pub fn new(use_case: HandleInquiryUseCase) -> Self {
        Self { use_case }
    }

    /// Handle one event and format the wire response.
    pub async fn handle(&self, event: &Value) -> WireResponse {
        let output = self.process(event).await;
        ResponseFormatter::format(&output.outcome, output.processing_time)
    }

    /// Handle one event, keeping the full inquiry output.
    pub async fn process(&self, event: &Value) -> InquiryOutput {
        let started = Instant::now();
        match RequestValidator::validate(event) {
            Ok(request) => {
                info!(contact_id = %request.contact_id, "Contact flow request accepted");
                self.use_case.execute(request.into_inquiry()).await
            }
            Err(e) => {
                let err = HelpdeskError::from(e);
                self.use_case.report_failure(&err, started)
            }
        }
    }

    /// Handle an event given as raw JSON text. Unparseable text is
    /// rejected like an event without a transcription.
    pub async fn process_raw(&self, raw: &str) -> InquiryOutput {
        match serde_json::from_str::<Value>(raw) {
            Ok(event) => self.process(&event).await,
            Err(e) => self.reject(format!("event is not valid JSON: {e}")),
        }
    }

    /// Report an event that could not be obtained at all.
    pub fn reject(&self, reason: impl Into<String>) -> InquiryOutput {
        let err = HelpdeskError::no_input(reason);
        warn!(error = %err, "Contact flow event rejected");
        self.use_case.report_failure(&err, Instant::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use helpdesk_application::{
        AnswerGenerator, AnswerQuestionUseCase, CapabilityError, ExecutionParams, Generation,
        KnowledgeResolver, KnowledgeStore,
    };
    use helpdesk_domain::{ErrorKind, QaRecord};
    use serde_json::json;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct StaticStore;

    #[async_trait]
    impl KnowledgeStore for StaticStore {
        async fn load_records(&self) -> Result<Vec<QaRecord>, CapabilityError> {
            Ok(vec![
                QaRecord::new("1", "レシート再発行", "再発行手順…", "receipt")
                    .with_keywords(["レシート", "再発行"]),
            ])
        }
    }

    struct SlowGenerator {
        calls: AtomicUsize,
        delay: Duration,
    }

    #[async_trait]
    impl AnswerGenerator for SlowGenerator {
        fn model_id(&self) -> &str {
            "slow-model"
        }

        async fn generate(&self, _prompt: &str) -> Result<Generation, CapabilityError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            tokio::time::sleep(self.delay).await;
            Ok(Generation::new("generated"))
        }
    }

    fn handler(
        delay: Duration,
        timeout: Option<Duration>,
    ) -> (ContactFlowHandler, Arc<SlowGenerator>) {
        let generator = Arc::new(SlowGenerator {
            calls: AtomicUsize::new(0),
            delay,
        });
        let resolver = KnowledgeResolver::new(Some(Arc::new(StaticStore)));
        let answerer = AnswerQuestionUseCase::new(resolver).with_generator(generator.clone());
        let use_case = HandleInquiryUseCase::new(answerer)
            .with_params(ExecutionParams::default().with_call_timeout(timeout));
        (ContactFlowHandler::new(use_case), generator)
    }

    fn event(text: &str) -> Value {
        json!({"Details": {"Parameters": {"transcribedText": text, "contactId": "c-9"}}})
    }

    #[tokio::test]
    async fn test_handle_answered_event() {
        let (handler, generator) = handler(Duration::ZERO, None);
        let response = handler.handle(&event("レシートを再発行したい")).await;

        assert_eq!(response.status_code, 200);
        assert_eq!(response.body.response, "再発行手順…");
        assert_eq!(response.body.category, "receipt");
        assert!(!response.body.error);
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_malformed_event_still_returns_200() {
        let (handler, generator) = handler(Duration::ZERO, None);
        let response = handler.handle(&json!({"Details": {}})).await;

        assert_eq!(response.status_code, 200);
        assert!(response.body.error);
        assert!(response.body.retry);
        assert_eq!(response.body.category, "error_no_input");
        assert_eq!(response.body.response, ErrorKind::NoInput.message());
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_unparseable_event_is_no_input() {
        let (handler, generator) = handler(Duration::ZERO, None);
        let output = handler.process_raw("{\"Details\": ").await;

        assert!(output.outcome.error);
        assert!(output.outcome.retry);
        assert_eq!(output.outcome.category, "error_no_input");
        assert_eq!(generator.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_raw_event_is_handled() {
        let (handler, _) = handler(Duration::ZERO, None);
        let raw = event("レシートを再発行したい").to_string();
        let output = handler.process_raw(&raw).await;

        assert!(!output.outcome.error);
        assert_eq!(output.outcome.category, "receipt");
    }

    #[test]
    fn test_reject_reports_no_input() {
        let (handler, _) = handler(Duration::ZERO, None);
        let output = handler.reject("event file not found");

        assert_eq!(output.outcome.category, "error_no_input");
        assert!(output.source.is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_deadline_maps_to_timeout() {
        let (handler, _) = handler(Duration::from_secs(20), Some(Duration::from_secs(3)));
        let response = handler.handle(&event("天気はどうですか")).await;

        assert_eq!(response.status_code, 200);
        assert!(response.body.error);
        assert!(!response.body.retry);
        assert_eq!(response.body.category, "error_timeout");
    }
}
