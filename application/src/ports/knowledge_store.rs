//! Knowledge store port
//!
//! Source of the curated Q&A records used by the local matcher.

use super::capability::CapabilityError;
use async_trait::async_trait;
use helpdesk_domain::QaRecord;

/// Loads the full Q&A record set.
///
/// Each call returns a fresh snapshot; the resolver treats it as immutable
/// for the duration of one resolution.
#[async_trait]
pub trait KnowledgeStore: Send + Sync {
    async fn load_records(&self) -> Result<Vec<QaRecord>, CapabilityError>;
}
