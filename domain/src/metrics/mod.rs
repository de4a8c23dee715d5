//! Call-quality metric events.
//!
//! Events are plain data; emitting them is the job of a metrics sink
//! adapter, which also adds deployment dimensions such as the environment.

mod event;
mod usage;

pub use event::{
    CallMetrics, GenerationMetrics, KnowledgeBaseMetrics, MetricDatum, MetricEvent, MetricUnit,
};
pub use usage::{TokenPricing, TokenUsage};
