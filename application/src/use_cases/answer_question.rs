//! Answer question use case
//!
//! Escalation controller: accepts the knowledge match when it clears the
//! [`EscalationPolicy`] threshold, otherwise asks the [`AnswerGenerator`]
//! and falls back to a fixed apology when generation fails.

use crate::ports::answer_generator::{AnswerGenerator, Generation};
use crate::ports::capability::CapabilityError;
use crate::ports::metrics_sink::{MetricsSink, NoMetrics};
use crate::use_cases::resolve_knowledge::KnowledgeResolver;
use crate::use_cases::shared::record_metric;
use helpdesk_domain::{
    Answer, EscalationPolicy, GenerationMetrics, PromptTemplate, TokenPricing, category, preview,
};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Use case producing the final answer for a validated question.
#[derive(Clone)]
pub struct AnswerQuestionUseCase {
    resolver: KnowledgeResolver,
    generator: Option<Arc<dyn AnswerGenerator>>,
    policy: EscalationPolicy,
    pricing: TokenPricing,
    metrics: Arc<dyn MetricsSink>,
}

impl AnswerQuestionUseCase {
    pub fn new(resolver: KnowledgeResolver) -> Self {
        Self {
            resolver,
            generator: None,
            policy: EscalationPolicy::default(),
            pricing: TokenPricing::default(),
            metrics: Arc::new(NoMetrics),
        }
    }

    /// Use a generative capability for low-confidence questions.
    pub fn with_generator(mut self, generator: Arc<dyn AnswerGenerator>) -> Self {
        self.generator = Some(generator);
        self
    }

    pub fn with_policy(mut self, policy: EscalationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Token prices used for the generation cost estimate.
    pub fn with_pricing(mut self, pricing: TokenPricing) -> Self {
        self.pricing = pricing;
        self
    }

    /// Create with a metrics sink.
    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsSink>) -> Self {
        self.metrics = metrics;
        self
    }

    pub fn policy(&self) -> &EscalationPolicy {
        &self.policy
    }

    /// Resolve and, if needed, escalate. Never fails.
    pub async fn answer(&self, question: &str) -> Answer {
        let result = self.resolver.resolve(question).await;

        if self.policy.accepts(result.confidence) {
            debug!(
                confidence = result.confidence,
                category = %result.category,
                "Knowledge match accepted"
            );
            return Answer::resolved(result);
        }

        info!(
            confidence = result.confidence,
            threshold = self.policy.confidence_threshold,
            "Low confidence match, escalating to generation"
        );

        match self.generate(question).await {
            Ok(generation) => {
                info!("Generated answer: {}", preview(&generation.text, 60));
                Answer::generated(
                    generation.text,
                    self.policy.generated_confidence,
                    category::GENERATED,
                )
            }
            Err(e) => {
                warn!(error = %e, "Answer generation failed");
                Answer::generation_failed(
                    PromptTemplate::generation_apology(),
                    self.policy.fallback_confidence,
                    category::GENERATION_ERROR,
                )
            }
        }
    }

    async fn generate(&self, question: &str) -> Result<Generation, CapabilityError> {
        let generator = self.generator.as_ref().ok_or_else(|| {
            CapabilityError::Unavailable("answer generator not configured".into())
        })?;

        let prompt = PromptTemplate::support_answer(question);
        let started = Instant::now();
        let result = generator.generate(&prompt).await;

        let usage = result.as_ref().ok().and_then(|g| g.usage).unwrap_or_default();
        record_metric(
            self.metrics.as_ref(),
            &GenerationMetrics {
                generation_time: started.elapsed(),
                model_id: generator.model_id().to_string(),
                success: result.is_ok(),
                token_count: usage.total(),
                estimated_cost: self.pricing.estimate(&usage),
            },
        );

        result
    }
}
