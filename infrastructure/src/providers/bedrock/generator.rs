//! Bedrock answer generator
//!
//! Single-turn Converse API call implementing the `AnswerGenerator` port.
//! No history is kept: every escalation is an independent request.

use super::types;
use crate::config::FileGenerationConfig;
use async_trait::async_trait;
use aws_sdk_bedrockruntime::Client as BedrockClient;
use aws_sdk_bedrockruntime::types as bedrock;
use helpdesk_application::{AnswerGenerator, CapabilityError, Generation};
use std::sync::Arc;
use tracing::debug;

pub struct BedrockAnswerGenerator {
    client: Arc<BedrockClient>,
    model_id: String,
    max_tokens: i32,
    temperature: f32,
}

impl BedrockAnswerGenerator {
    pub fn new(sdk_config: &aws_config::SdkConfig, config: &FileGenerationConfig) -> Self {
        Self {
            client: Arc::new(BedrockClient::new(sdk_config)),
            model_id: config.model_id.clone(),
            max_tokens: config.max_tokens,
            temperature: config.temperature,
        }
    }
}

#[async_trait]
impl AnswerGenerator for BedrockAnswerGenerator {
    fn model_id(&self) -> &str {
        &self.model_id
    }

    async fn generate(&self, prompt: &str) -> Result<Generation, CapabilityError> {
        let user_msg = bedrock::Message::builder()
            .role(bedrock::ConversationRole::User)
            .content(bedrock::ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| {
                CapabilityError::RequestFailed(format!("Failed to build message: {}", e))
            })?;

        debug!(model = %self.model_id, "Calling Bedrock Converse API");

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(user_msg)
            .inference_config(
                bedrock::InferenceConfiguration::builder()
                    .max_tokens(self.max_tokens)
                    .temperature(self.temperature)
                    .build(),
            )
            .send()
            .await
            .map_err(|e| types::convert_converse_error(&e))?;

        let output = response.output().ok_or_else(|| {
            CapabilityError::InvalidResponse("No output in Bedrock response".to_string())
        })?;

        let text = types::extract_text(output).ok_or_else(|| {
            CapabilityError::InvalidResponse("Bedrock response contained no text".to_string())
        })?;

        let generation = Generation::new(text);
        Ok(match response.usage().and_then(types::convert_usage) {
            Some(usage) => {
                debug!(
                    input_tokens = usage.input_tokens,
                    output_tokens = usage.output_tokens,
                    "Bedrock token usage"
                );
                generation.with_usage(usage)
            }
            None => generation,
        })
    }
}
