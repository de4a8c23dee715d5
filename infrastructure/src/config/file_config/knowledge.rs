//! Knowledge source configuration from TOML (`[knowledge]` section)

use helpdesk_application::DEFAULT_TOP_K;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Knowledge base id shipped in deployment templates before a real one exists.
pub const PLACEHOLDER_KNOWLEDGE_BASE_ID: &str = "debug-placeholder";

/// Object key of the Q&A record set inside the knowledge bucket.
pub const DEFAULT_OBJECT_KEY: &str = "qa-data/qa-knowledge.json";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileKnowledgeConfig {
    /// Managed knowledge base id. Empty or the placeholder means "not configured".
    pub knowledge_base_id: Option<String>,
    /// Bucket holding the Q&A record set.
    pub bucket: Option<String>,
    /// Object key of the Q&A record set (default: "qa-data/qa-knowledge.json")
    pub object_key: String,
    /// Local JSON file with Q&A records; used when no bucket is set.
    pub local_path: Option<PathBuf>,
    /// Passages requested from the knowledge base (default: 3)
    pub top_k: usize,
}

impl Default for FileKnowledgeConfig {
    fn default() -> Self {
        Self {
            knowledge_base_id: None,
            bucket: None,
            object_key: DEFAULT_OBJECT_KEY.to_string(),
            local_path: None,
            top_k: DEFAULT_TOP_K,
        }
    }
}

impl FileKnowledgeConfig {
    /// Effective knowledge base id, with the placeholder and blanks removed.
    pub fn knowledge_base_id(&self) -> Option<&str> {
        self.knowledge_base_id
            .as_deref()
            .map(str::trim)
            .filter(|id| !id.is_empty() && *id != PLACEHOLDER_KNOWLEDGE_BASE_ID)
    }

    /// `true` when the id is literally the deployment placeholder.
    pub fn is_placeholder(&self) -> bool {
        self.knowledge_base_id.as_deref().map(str::trim) == Some(PLACEHOLDER_KNOWLEDGE_BASE_ID)
    }

    pub fn bucket(&self) -> Option<&str> {
        self.bucket
            .as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
    }
}
