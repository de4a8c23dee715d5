//! Execution parameters: per-call control.
//!
//! [`ExecutionParams`] groups the static parameters that control how one
//! inquiry is executed. They are read once at startup and shared read-only
//! by every call. Escalation thresholds are domain policy and live in
//! [`EscalationPolicy`](helpdesk_domain::EscalationPolicy) instead.

use crate::use_cases::resolve_knowledge::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Per-call execution parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExecutionParams {
    /// Number of passages requested from the managed retrieval capability.
    pub retrieval_top_k: usize,
    /// Overall deadline for resolving one inquiry. `None` disables it.
    pub call_timeout: Option<Duration>,
}

impl Default for ExecutionParams {
    fn default() -> Self {
        Self {
            retrieval_top_k: DEFAULT_TOP_K,
            call_timeout: Some(Duration::from_secs(8)),
        }
    }
}

impl ExecutionParams {
    // ==================== Builder Methods ====================

    pub fn with_retrieval_top_k(mut self, k: usize) -> Self {
        self.retrieval_top_k = k;
        self
    }

    pub fn with_call_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.call_timeout = timeout;
        self
    }
}
