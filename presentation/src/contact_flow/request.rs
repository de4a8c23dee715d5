//! Contact-flow event parsing and validation
//!
//! The telephony platform invokes us with
//! `{"Details": {"Parameters": {"transcribedText", "contactId", "customerPhoneNumber"}}}`.

use helpdesk_application::{InquiryInput, UNKNOWN_CALLER};
use helpdesk_domain::core::question;
use helpdesk_domain::{ErrorKind, HelpdeskError, InputRejection};
use serde_json::Value;
use thiserror::Error;

/// Why a contact-flow event was rejected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RequestError {
    #[error("event is empty")]
    EmptyEvent,

    #[error("'Details' field not found")]
    MissingDetails,

    #[error("'Parameters' field not found")]
    MissingParameters,

    #[error(transparent)]
    Transcription(#[from] InputRejection),
}

impl RequestError {
    /// Every rejection asks the caller to speak again.
    pub fn kind(&self) -> ErrorKind {
        match self {
            RequestError::Transcription(rejection) => rejection.kind(),
            RequestError::EmptyEvent
            | RequestError::MissingDetails
            | RequestError::MissingParameters => ErrorKind::NoInput,
        }
    }
}

impl From<RequestError> for HelpdeskError {
    fn from(err: RequestError) -> Self {
        HelpdeskError::new(err.kind(), err.to_string())
    }
}

/// A validated contact-flow request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactFlowRequest {
    pub transcribed_text: String,
    pub contact_id: String,
    pub customer_phone_number: String,
}

impl ContactFlowRequest {
    pub fn into_inquiry(self) -> InquiryInput {
        InquiryInput::new(self.transcribed_text).with_contact_id(self.contact_id)
    }
}

/// Validates raw contact-flow events.
pub struct RequestValidator;

impl RequestValidator {
    pub fn validate(event: &Value) -> Result<ContactFlowRequest, RequestError> {
        if is_empty(event) {
            return Err(RequestError::EmptyEvent);
        }

        let details = event
            .get("Details")
            .filter(|v| !is_empty(v))
            .ok_or(RequestError::MissingDetails)?;
        let parameters = details
            .get("Parameters")
            .filter(|v| !is_empty(v))
            .ok_or(RequestError::MissingParameters)?;

        let transcribed_text = string_field(parameters, "transcribedText").unwrap_or_default();
        if let Some(rejection) = question::validate(&transcribed_text) {
            return Err(rejection.into());
        }

        Ok(ContactFlowRequest {
            transcribed_text,
            contact_id: string_field(parameters, "contactId")
                .unwrap_or_else(|| UNKNOWN_CALLER.to_string()),
            customer_phone_number: string_field(parameters, "customerPhoneNumber")
                .unwrap_or_else(|| UNKNOWN_CALLER.to_string()),
        })
    }
}

fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Object(map) => map.is_empty(),
        _ => false,
    }
}

fn string_field(parameters: &Value, name: &str) -> Option<String> {
    parameters
        .get(name)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use helpdesk_domain::MAX_QUESTION_CHARS;
    use serde_json::json;

    #[test]
    fn test_valid_event() {
        let event = json!({
            "Details": {
                "Parameters": {
                    "transcribedText": "レシートを再発行したい",
                    "contactId": "c-123",
                    "customerPhoneNumber": "+81000000000"
                }
            }
        });

        let request = RequestValidator::validate(&event).unwrap();
        assert_eq!(request.transcribed_text, "レシートを再発行したい");
        assert_eq!(request.contact_id, "c-123");
        assert_eq!(request.customer_phone_number, "+81000000000");

        let inquiry = request.into_inquiry();
        assert_eq!(inquiry.contact_id, "c-123");
    }

    #[test]
    fn test_missing_ids_default_to_unknown() {
        let event = json!({"Details": {"Parameters": {"transcribedText": "hello"}}});
        let request = RequestValidator::validate(&event).unwrap();
        assert_eq!(request.contact_id, "unknown");
        assert_eq!(request.customer_phone_number, "unknown");
    }

    #[test]
    fn test_structural_rejections() {
        assert_eq!(
            RequestValidator::validate(&json!({})),
            Err(RequestError::EmptyEvent)
        );
        assert_eq!(
            RequestValidator::validate(&Value::Null),
            Err(RequestError::EmptyEvent)
        );
        assert_eq!(
            RequestValidator::validate(&json!({"Other": 1})),
            Err(RequestError::MissingDetails)
        );
        assert_eq!(
            RequestValidator::validate(&json!({"Details": {}})),
            Err(RequestError::MissingDetails)
        );
        assert_eq!(
            RequestValidator::validate(&json!({"Details": {"ContactData": {}}})),
            Err(RequestError::MissingParameters)
        );
    }

    #[test]
    fn test_transcription_rejections() {
        let blank = json!({"Details": {"Parameters": {"transcribedText": "   "}}});
        assert_eq!(
            RequestValidator::validate(&blank),
            Err(RequestError::Transcription(InputRejection::Empty))
        );

        let missing = json!({"Details": {"Parameters": {"contactId": "c-1"}}});
        assert_eq!(
            RequestValidator::validate(&missing),
            Err(RequestError::Transcription(InputRejection::Empty))
        );

        let long = json!({"Details": {"Parameters": {
            "transcribedText": "a".repeat(MAX_QUESTION_CHARS + 1)
        }}});
        assert!(matches!(
            RequestValidator::validate(&long),
            Err(RequestError::Transcription(InputRejection::TooLong { .. }))
        ));
    }

    #[test]
    fn test_rejection_is_no_input() {
        let err: HelpdeskError = RequestError::MissingDetails.into();
        assert_eq!(err.kind, ErrorKind::NoInput);
        assert!(err.message.contains("Details"));
    }
}
