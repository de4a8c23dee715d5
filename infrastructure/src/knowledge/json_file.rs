//! Knowledge store backed by a local JSON file.

use super::parse_records;
use async_trait::async_trait;
use helpdesk_application::{CapabilityError, KnowledgeStore};
use helpdesk_domain::QaRecord;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Reads the Q&A record set from a JSON array on disk.
///
/// The file is re-read on every call so edits are picked up without a restart.
pub struct JsonFileKnowledgeStore {
    path: PathBuf,
}

impl JsonFileKnowledgeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl KnowledgeStore for JsonFileKnowledgeStore {
    async fn load_records(&self) -> Result<Vec<QaRecord>, CapabilityError> {
        let bytes = tokio::fs::read(&self.path).await.map_err(|e| {
            CapabilityError::Unavailable(format!("{}: {e}", self.path.display()))
        })?;
        let records = parse_records(&bytes)?;
        debug!(
            path = %self.path.display(),
            records = records.len(),
            "Loaded knowledge records"
        );
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORDS: &str = r#"[
        {"id": "1", "question": "レシート再発行", "answer": "再発行手順…",
         "category": "receipt", "keywords": ["レシート", "再発行"]},
        {"id": "2", "question": "How do I close the register?", "answer": "Press Close.",
         "category": "register"}
    ]"#;

    #[tokio::test]
    async fn test_load_records() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("qa-knowledge.json");
        std::fs::write(&path, RECORDS).unwrap();

        let records = JsonFileKnowledgeStore::new(&path)
            .load_records()
            .await
            .unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].keywords, vec!["レシート", "再発行"]);
        // Missing keywords default to empty
        assert!(records[1].keywords.is_empty());
    }

    #[tokio::test]
    async fn test_missing_file_is_unavailable() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileKnowledgeStore::new(dir.path().join("absent.json"));

        assert!(matches!(
            store.load_records().await,
            Err(CapabilityError::Unavailable(_))
        ));
    }

    #[tokio::test]
    async fn test_malformed_file_is_invalid_response() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.json");
        std::fs::write(&path, r#"{"not": "an array"}"#).unwrap();

        assert!(matches!(
            JsonFileKnowledgeStore::new(&path).load_records().await,
            Err(CapabilityError::InvalidResponse(_))
        ));
    }
}
