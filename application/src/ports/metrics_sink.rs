//! Port for call-quality metrics.
//!
//! Defines the [`MetricsSink`] trait for emitting [`MetricEvent`]s. Sinks
//! may fail; use cases never call them directly but go through
//! [`record_metric`](crate::use_cases::shared::record_metric), which applies
//! the best-effort policy.

use super::capability::CapabilityError;
use helpdesk_domain::MetricEvent;

/// Destination for metric events.
///
/// `record` is synchronous: implementations buffer or write locally and
/// must not block on the network.
pub trait MetricsSink: Send + Sync {
    /// Record one event.
    fn record(&self, event: &MetricEvent) -> Result<(), CapabilityError>;
}

/// No-op implementation for tests and when metrics are disabled.
pub struct NoMetrics;

impl MetricsSink for NoMetrics {
    fn record(&self, _event: &MetricEvent) -> Result<(), CapabilityError> {
        Ok(())
    }
}
