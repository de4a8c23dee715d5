//! Type conversions between the AWS Bedrock SDKs and application types
//!
//! Converts Converse API output to plain text and token usage, retrieval
//! results to [`RetrievedPassage`]s, and SDK errors to [`CapabilityError`].

use aws_sdk_bedrockagentruntime::operation::retrieve::RetrieveError;
use aws_sdk_bedrockagentruntime::types::KnowledgeBaseRetrievalResult;
use aws_sdk_bedrockruntime::operation::converse::ConverseError;
use aws_sdk_bedrockruntime::types as bedrock;
use helpdesk_application::{CapabilityError, RetrievedPassage};
use helpdesk_domain::TokenUsage;

// ─── Bedrock → Application ───────────────────────────────────────

/// Concatenate the text blocks of a Converse output.
///
/// Returns `None` when the output carries no text at all.
pub fn extract_text(output: &bedrock::ConverseOutput) -> Option<String> {
    let bedrock::ConverseOutput::Message(message) = output else {
        return None;
    };

    let text: String = message
        .content()
        .iter()
        .filter_map(|block| match block {
            bedrock::ContentBlock::Text(text) => Some(text.as_str()),
            // Skip ToolUse, Image, GuardContent, etc.
            _ => None,
        })
        .collect();

    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Token usage reported by a Converse call.
pub fn convert_usage(usage: &bedrock::TokenUsage) -> Option<TokenUsage> {
    to_usage(usage.input_tokens(), usage.output_tokens())
}

/// Negative counts are treated as zero; all-zero usage is `None`.
pub fn to_usage(input_tokens: i32, output_tokens: i32) -> Option<TokenUsage> {
    let usage = TokenUsage::new(
        u64::try_from(input_tokens).unwrap_or(0),
        u64::try_from(output_tokens).unwrap_or(0),
    );
    (usage.total() > 0).then_some(usage)
}

/// Convert ranked retrieval results, preserving order.
pub fn convert_retrieval_results(
    results: &[KnowledgeBaseRetrievalResult],
) -> Vec<RetrievedPassage> {
    results
        .iter()
        .filter_map(|result| {
            let text = result
                .content()
                .and_then(|content| Option::<&str>::from(content.text()));
            to_passage(text, result.score())
        })
        .collect()
}

/// A result without text is dropped; a missing score counts as zero relevance.
pub fn to_passage(text: Option<&str>, score: Option<f64>) -> Option<RetrievedPassage> {
    let text = text.map(str::trim).filter(|t| !t.is_empty())?;
    Some(RetrievedPassage::new(text, score.unwrap_or(0.0)))
}

// ─── SDK errors ──────────────────────────────────────────────────

/// Convert a Converse SDK error to a CapabilityError.
pub fn convert_converse_error(
    err: &aws_sdk_bedrockruntime::error::SdkError<ConverseError>,
) -> CapabilityError {
    use aws_sdk_bedrockruntime::error::SdkError;

    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            ConverseError::ThrottlingException(e) => {
                CapabilityError::RequestFailed(format!("Bedrock throttled: {}", e))
            }
            ConverseError::ModelNotReadyException(e) => {
                CapabilityError::Unavailable(format!("Bedrock model not ready: {}", e))
            }
            ConverseError::AccessDeniedException(e) => {
                CapabilityError::Unavailable(format!("Bedrock access denied: {}", e))
            }
            ConverseError::ValidationException(e) => {
                CapabilityError::RequestFailed(format!("Bedrock validation error: {}", e))
            }
            ConverseError::ModelTimeoutException(_) => CapabilityError::Timeout,
            other => CapabilityError::RequestFailed(format!("Bedrock error: {:?}", other)),
        },
        SdkError::TimeoutError(_) => CapabilityError::Timeout,
        other => CapabilityError::Unavailable(format!("Bedrock SDK error: {}", other)),
    }
}

/// Convert a Knowledge Bases `Retrieve` SDK error to a CapabilityError.
pub fn convert_retrieve_error(
    err: &aws_sdk_bedrockagentruntime::error::SdkError<RetrieveError>,
) -> CapabilityError {
    use aws_sdk_bedrockagentruntime::error::SdkError;

    match err {
        SdkError::ServiceError(service_err) => match service_err.err() {
            RetrieveError::ResourceNotFoundException(e) => {
                CapabilityError::Unavailable(format!("Knowledge base not found: {}", e))
            }
            RetrieveError::AccessDeniedException(e) => {
                CapabilityError::Unavailable(format!("Knowledge base access denied: {}", e))
            }
            RetrieveError::ThrottlingException(e) => {
                CapabilityError::RequestFailed(format!("Knowledge base throttled: {}", e))
            }
            RetrieveError::ValidationException(e) => {
                CapabilityError::RequestFailed(format!("Knowledge base validation error: {}", e))
            }
            other => CapabilityError::RequestFailed(format!("Knowledge base error: {:?}", other)),
        },
        SdkError::TimeoutError(_) => CapabilityError::Timeout,
        other => CapabilityError::Unavailable(format!("Knowledge base SDK error: {}", other)),
    }
}
