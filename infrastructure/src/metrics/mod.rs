//! Metrics infrastructure: call-quality metric emission.
//!
//! Provides [`JsonlMetricsSink`], a JSONL file writer that implements
//! the [`MetricsSink`](helpdesk_application::MetricsSink) port.

mod jsonl_sink;

pub use jsonl_sink::{JsonlMetricsSink, METRICS_NAMESPACE};
