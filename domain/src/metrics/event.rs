//! Metric event shapes

use serde::Serialize;
use std::time::Duration;

/// Unit of a metric value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MetricUnit {
    Seconds,
    Count,
    None,
}

/// A single named metric value with its dimensions.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricDatum {
    pub name: &'static str,
    pub value: f64,
    pub unit: MetricUnit,
    pub dimensions: Vec<(&'static str, String)>,
}

impl MetricDatum {
    fn new(name: &'static str, value: f64, unit: MetricUnit) -> Self {
        Self {
            name,
            value,
            unit,
            dimensions: Vec::new(),
        }
    }

    fn dimension(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.dimensions.push((name, value.into()));
        self
    }
}

/// A batch of metrics emitted together.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricEvent {
    pub event_type: &'static str,
    pub data: Vec<MetricDatum>,
}

impl MetricEvent {
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn datum(&self, name: &str) -> Option<&MetricDatum> {
        self.data.iter().find(|d| d.name == name)
    }
}

/// Per-call quality figures.
#[derive(Debug, Clone, PartialEq)]
pub struct CallMetrics {
    pub response_time: Duration,
    pub category: String,
    pub confidence: f64,
    pub answer_found: bool,
    /// Set when the call ended in an error outcome.
    pub error_type: Option<String>,
}

impl From<&CallMetrics> for MetricEvent {
    fn from(call: &CallMetrics) -> Self {
        let mut data = Vec::new();

        let seconds = call.response_time.as_secs_f64();
        if seconds > 0.0 {
            data.push(
                MetricDatum::new("ResponseTime", seconds, MetricUnit::Seconds)
                    .dimension("Category", call.category.as_str()),
            );
        }

        data.push(MetricDatum::new(
            "ResolutionRate",
            if call.answer_found { 1.0 } else { 0.0 },
            MetricUnit::Count,
        ));

        if call.confidence >= 0.0 {
            data.push(
                MetricDatum::new("ConfidenceScore", call.confidence, MetricUnit::None)
                    .dimension("Category", call.category.as_str()),
            );
        }

        if let Some(error_type) = &call.error_type {
            data.push(
                MetricDatum::new("ErrorCount", 1.0, MetricUnit::Count)
                    .dimension("ErrorType", error_type.as_str()),
            );
        }

        MetricEvent {
            event_type: "call_metrics",
            data,
        }
    }
}

/// Figures from one managed retrieval call.
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeBaseMetrics {
    pub search_time: Duration,
    pub result_count: usize,
    pub top_score: f64,
}

impl From<&KnowledgeBaseMetrics> for MetricEvent {
    fn from(kb: &KnowledgeBaseMetrics) -> Self {
        let mut data = Vec::new();

        let seconds = kb.search_time.as_secs_f64();
        if seconds > 0.0 {
            data.push(MetricDatum::new(
                "KnowledgeBaseSearchTime",
                seconds,
                MetricUnit::Seconds,
            ));
        }

        data.push(MetricDatum::new(
            "KnowledgeBaseResultCount",
            kb.result_count as f64,
            MetricUnit::Count,
        ));

        if kb.top_score > 0.0 {
            data.push(MetricDatum::new(
                "KnowledgeBaseTopScore",
                kb.top_score,
                MetricUnit::None,
            ));
        }

        MetricEvent {
            event_type: "kb_metrics",
            data,
        }
    }
}

/// Figures from one generation call.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationMetrics {
    pub generation_time: Duration,
    pub model_id: String,
    pub success: bool,
    /// Input plus output tokens; 0 when the model did not report usage
    pub token_count: u64,
    /// Estimated cost in USD; 0 when pricing is not configured
    pub estimated_cost: f64,
}

impl From<&GenerationMetrics> for MetricEvent {
    fn from(generation: &GenerationMetrics) -> Self {
        let mut data = Vec::new();

        let seconds = generation.generation_time.as_secs_f64();
        if seconds > 0.0 {
            data.push(
                MetricDatum::new("BedrockGenerationTime", seconds, MetricUnit::Seconds)
                    .dimension("ModelId", generation.model_id.as_str()),
            );
        }

        if generation.token_count > 0 {
            data.push(
                MetricDatum::new(
                    "BedrockTokenCount",
                    generation.token_count as f64,
                    MetricUnit::Count,
                )
                .dimension("ModelId", generation.model_id.as_str()),
            );
        }

        if generation.estimated_cost > 0.0 {
            data.push(MetricDatum::new(
                "BedrockEstimatedCost",
                generation.estimated_cost,
                MetricUnit::None,
            ));
        }

        if !generation.success {
            data.push(
                MetricDatum::new("BedrockErrorCount", 1.0, MetricUnit::Count)
                    .dimension("ModelId", generation.model_id.as_str()),
            );
        }

        MetricEvent {
            event_type: "bedrock_metrics",
            data,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_call_metrics_success() {
        let event = MetricEvent::from(&CallMetrics {
            response_time: Duration::from_millis(1500),
            category: "receipt".to_string(),
            confidence: 0.67,
            answer_found: true,
            error_type: None,
        });
        assert_eq!(event.event_type, "call_metrics");
        assert_eq!(event.datum("ResponseTime").unwrap().value, 1.5);
        assert_eq!(event.datum("ResolutionRate").unwrap().value, 1.0);
        assert_eq!(
            event.datum("ConfidenceScore").unwrap().dimensions,
            vec![("Category", "receipt".to_string())]
        );
        assert!(event.datum("ErrorCount").is_none());
    }

    #[test]
    fn test_call_metrics_error_and_zero_time() {
        let event = MetricEvent::from(&CallMetrics {
            response_time: Duration::ZERO,
            category: "error_timeout".to_string(),
            confidence: 0.0,
            answer_found: false,
            error_type: Some("timeout".to_string()),
        });
        assert!(event.datum("ResponseTime").is_none());
        assert_eq!(event.datum("ResolutionRate").unwrap().value, 0.0);
        assert_eq!(event.datum("ErrorCount").unwrap().value, 1.0);
    }

    #[test]
    fn test_kb_metrics_omit_zero_score() {
        let event = MetricEvent::from(&KnowledgeBaseMetrics {
            search_time: Duration::from_millis(20),
            result_count: 0,
            top_score: 0.0,
        });
        assert_eq!(event.datum("KnowledgeBaseResultCount").unwrap().value, 0.0);
        assert!(event.datum("KnowledgeBaseTopScore").is_none());
    }

    #[test]
    fn test_generation_metrics_failure() {
        let event = MetricEvent::from(&GenerationMetrics {
            generation_time: Duration::from_secs(2),
            model_id: "model-x".to_string(),
            success: false,
            token_count: 0,
            estimated_cost: 0.0,
        });
        assert_eq!(event.event_type, "bedrock_metrics");
        assert!(event.datum("BedrockErrorCount").is_some());
        assert!(event.datum("BedrockTokenCount").is_none());
        assert!(event.datum("BedrockEstimatedCost").is_none());
        assert_eq!(
            event.datum("BedrockGenerationTime").unwrap().dimensions[0].1,
            "model-x"
        );
    }

    #[test]
    fn test_generation_metrics_usage() {
        let event = MetricEvent::from(&GenerationMetrics {
            generation_time: Duration::from_millis(800),
            model_id: "model-x".to_string(),
            success: true,
            token_count: 500,
            estimated_cost: 0.0066,
        });
        assert!(event.datum("BedrockErrorCount").is_none());

        let tokens = event.datum("BedrockTokenCount").unwrap();
        assert_eq!(tokens.value, 500.0);
        assert_eq!(tokens.unit, MetricUnit::Count);
        assert_eq!(tokens.dimensions, vec![("ModelId", "model-x".to_string())]);

        let cost = event.datum("BedrockEstimatedCost").unwrap();
        assert_eq!(cost.value, 0.0066);
        assert_eq!(cost.unit, MetricUnit::None);
        assert!(cost.dimensions.is_empty());
    }
}
