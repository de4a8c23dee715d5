//! Wire response shape and the output formatter trait

use helpdesk_application::InquiryOutput;
use helpdesk_domain::ResolutionOutcome;
use serde::Serialize;
use std::time::Duration;

/// Status code the contact flow always receives; failures live in the body.
pub const STATUS_OK: u16 = 200;

/// Response returned to the contact flow.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireResponse {
    pub status_code: u16,
    pub body: WireBody,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WireBody {
    pub response: String,
    pub confidence: f64,
    pub category: String,
    /// Seconds, rounded to 3 decimals
    pub processing_time: f64,
    pub error: bool,
    pub retry: bool,
}

/// Trait for rendering a handled inquiry
pub trait OutputFormatter {
    fn format(&self, output: &InquiryOutput) -> String;
}

/// Builds [`WireResponse`]s from resolution outcomes.
pub struct ResponseFormatter;

impl ResponseFormatter {
    pub fn format(outcome: &ResolutionOutcome, processing_time: Duration) -> WireResponse {
        WireResponse {
            status_code: STATUS_OK,
            body: WireBody {
                response: outcome.response.clone(),
                confidence: outcome.confidence,
                category: outcome.category.clone(),
                processing_time: round_millis(processing_time),
                error: outcome.error,
                retry: outcome.retry,
            },
        }
    }

    /// Pretty JSON of the wire response
    pub fn to_json(response: &WireResponse) -> String {
        serde_json::to_string_pretty(response).unwrap_or_else(|_| "{}".to_string())
    }
}

impl OutputFormatter for ResponseFormatter {
    fn format(&self, output: &InquiryOutput) -> String {
        Self::to_json(&Self::format(&output.outcome, output.processing_time))
    }
}

fn round_millis(duration: Duration) -> f64 {
    (duration.as_secs_f64() * 1000.0).round() / 1000.0
}
