//! Knowledge store adapters
//!
//! Implementations of the [`KnowledgeStore`](helpdesk_application::KnowledgeStore)
//! port. Both read the same JSON array of Q&A records.

mod json_file;
#[cfg(feature = "aws")]
mod s3;

pub use json_file::JsonFileKnowledgeStore;
#[cfg(feature = "aws")]
pub use s3::S3KnowledgeStore;

use helpdesk_application::CapabilityError;
use helpdesk_domain::QaRecord;

/// Parse a JSON array of Q&A records.
pub fn parse_records(bytes: &[u8]) -> Result<Vec<QaRecord>, CapabilityError> {
    serde_json::from_slice(bytes)
        .map_err(|e| CapabilityError::InvalidResponse(format!("Q&A records: {e}")))
}
