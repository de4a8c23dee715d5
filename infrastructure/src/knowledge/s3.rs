//! Knowledge store backed by an S3 object.

use super::parse_records;
use async_trait::async_trait;
use aws_sdk_s3::Client as S3Client;
use helpdesk_application::{CapabilityError, KnowledgeStore};
use helpdesk_domain::QaRecord;
use tracing::debug;

/// Reads the Q&A record set from `s3://<bucket>/<key>` on every call.
pub struct S3KnowledgeStore {
    client: S3Client,
    bucket: String,
    key: String,
}

impl S3KnowledgeStore {
    pub fn new(
        sdk_config: &aws_config::SdkConfig,
        bucket: impl Into<String>,
        key: impl Into<String>,
    ) -> Self {
        Self {
            client: S3Client::new(sdk_config),
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    fn location(&self) -> String {
        format!("s3://{}/{}", self.bucket, self.key)
    }
}

#[async_trait]
impl KnowledgeStore for S3KnowledgeStore {
    async fn load_records(&self) -> Result<Vec<QaRecord>, CapabilityError> {
        let object = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(&self.key)
            .send()
            .await
            .map_err(|e| CapabilityError::Unavailable(format!("{}: {}", self.location(), e)))?;

        let bytes = object
            .body
            .collect()
            .await
            .map_err(|e| CapabilityError::RequestFailed(format!("{}: {}", self.location(), e)))?
            .into_bytes();

        let records = parse_records(&bytes)?;
        debug!(
            location = %self.location(),
            records = records.len(),
            "Loaded knowledge records"
        );
        Ok(records)
    }
}
