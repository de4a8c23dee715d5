//! Handle inquiry use case
//!
//! One call, end to end: validate the transcription, answer it under the
//! caller-side deadline, and report the result as a [`ResolutionOutcome`].
//! Every path, including failures, produces an outcome; failures go
//! through the [`ErrorClassifier`].

use crate::config::ExecutionParams;
use crate::ports::metrics_sink::{MetricsSink, NoMetrics};
use crate::use_cases::answer_question::AnswerQuestionUseCase;
use crate::use_cases::classify_error::ErrorClassifier;
use crate::use_cases::shared::record_metric;
use helpdesk_domain::{
    Answer, AnswerSource, CallMetrics, ErrorKind, HelpdeskError, Question, ResolutionOutcome,
    preview,
};
use std::error::Error as StdError;
use std::sync::Arc;
use std::time::{Duration, Instant};
use thiserror::Error;
use tracing::info;

/// Placeholder for identifiers the caller did not supply.
pub const UNKNOWN_CALLER: &str = "unknown";

/// Errors that end an inquiry before an answer is produced.
#[derive(Error, Debug)]
pub enum InquiryError {
    #[error("Input rejected: {0}")]
    InvalidInput(#[source] HelpdeskError),

    #[error("Deadline exceeded: {0}")]
    DeadlineExceeded(#[source] HelpdeskError),
}

/// Input for one inquiry.
#[derive(Debug, Clone)]
pub struct InquiryInput {
    /// Raw transcription of the customer's speech.
    pub transcript: String,
    pub contact_id: String,
}

impl InquiryInput {
    pub fn new(transcript: impl Into<String>) -> Self {
        Self {
            transcript: transcript.into(),
            contact_id: UNKNOWN_CALLER.to_string(),
        }
    }

    pub fn with_contact_id(mut self, contact_id: impl Into<String>) -> Self {
        self.contact_id = contact_id.into();
        self
    }
}

/// Result of one inquiry.
#[derive(Debug, Clone)]
pub struct InquiryOutput {
    pub outcome: ResolutionOutcome,
    pub processing_time: Duration,
    /// Which answer path was taken; `None` for error outcomes.
    pub source: Option<AnswerSource>,
}

/// Use case for handling one transcribed inquiry.
#[derive(Clone)]
pub struct HandleInquiryUseCase {
    answerer: AnswerQuestionUseCase,
    params: ExecutionParams,
    metrics: Arc<dyn MetricsSink>,
}

impl HandleInquiryUseCase {
    pub fn new(answerer: AnswerQuestionUseCase) -> Self {
        Self {
            answerer,
            params: ExecutionParams::default(),
            metrics: Arc::new(NoMetrics),
        }
    }

    pub fn with_params(mut self, params: ExecutionParams) -> Self {
        self.params = params;
        self
    }

    /// Create with a metrics sink.
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsSink>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn params(&self) -> &ExecutionParams {
        &self.params
    }

    /// Handle the inquiry. Never fails: errors become error outcomes.
    pub async fn execute(&self, input: InquiryInput) -> InquiryOutput {
        let started = Instant::now();
        info!(
            contact_id = %input.contact_id,
            "Processing inquiry: {}",
            preview(&input.transcript, 60)
        );

        match self.try_answer(&input.transcript).await {
            Ok(answer) => {
                let source = answer.source;
                let output = self.finish(ResolutionOutcome::from_answer(answer), started, None);
                info!(
                    contact_id = %input.contact_id,
                    elapsed_secs = output.processing_time.as_secs_f64(),
                    category = %output.outcome.category,
                    "Inquiry completed"
                );
                InquiryOutput {
                    source: Some(source),
                    ..output
                }
            }
            Err(e) => self.report_failure(&e, started),
        }
    }

    /// Validate, then answer under the configured deadline.
    pub async fn try_answer(&self, transcript: &str) -> Result<Answer, InquiryError> {
        let question = Question::parse(transcript).map_err(|rejection| {
            InquiryError::InvalidInput(HelpdeskError::new(rejection.kind(), rejection.to_string()))
        })?;

        let answering = self.answerer.answer(question.content());
        match self.params.call_timeout {
            Some(limit) => tokio::time::timeout(limit, answering).await.map_err(|_| {
                InquiryError::DeadlineExceeded(HelpdeskError::timeout(format!(
                    "no answer within {:.1}s",
                    limit.as_secs_f64()
                )))
            }),
            None => Ok(answering.await),
        }
    }

    /// Build the error outcome for a failure raised around this use case
    /// (e.g. a malformed event) and record it like any other call.
    pub fn report_failure(
        &self,
        err: &(dyn StdError + 'static),
        started: Instant,
    ) -> InquiryOutput {
        let (kind, outcome) = ErrorClassifier::handle(err, "handle_inquiry");
        self.finish(outcome, started, Some(kind))
    }

    fn finish(
        &self,
        outcome: ResolutionOutcome,
        started: Instant,
        error_kind: Option<ErrorKind>,
    ) -> InquiryOutput {
        let processing_time = started.elapsed();

        record_metric(
            self.metrics.as_ref(),
            &CallMetrics {
                response_time: processing_time,
                category: outcome.category.clone(),
                confidence: outcome.confidence,
                answer_found: outcome.answer_found(),
                error_type: error_kind.map(|k| k.as_str().to_string()),
            },
        );

        InquiryOutput {
            outcome,
            processing_time,
            source: None,
        }
    }
}
