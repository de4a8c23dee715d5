//! Answer generator port
//!
//! Defines the interface to the generative model used when the knowledge
//! lookup is not confident enough.

use super::capability::CapabilityError;
use async_trait::async_trait;
use helpdesk_domain::TokenUsage;

/// Text produced by one generation call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    /// Token usage, when the model reports it
    pub usage: Option<TokenUsage>,
}

impl Generation {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            usage: None,
        }
    }

    pub fn with_usage(mut self, usage: TokenUsage) -> Self {
        self.usage = Some(usage);
        self
    }
}

/// Text-completion capability: `generate(prompt) -> text`.
///
/// Implementations (adapters) live in the infrastructure layer. A single
/// call is made per escalation, with no retry on this side.
#[async_trait]
pub trait AnswerGenerator: Send + Sync {
    /// Identifier of the underlying model, used for metrics and logs.
    fn model_id(&self) -> &str;

    /// Complete `prompt` and return the generated text with its usage.
    async fn generate(&self, prompt: &str) -> Result<Generation, CapabilityError>;
}
