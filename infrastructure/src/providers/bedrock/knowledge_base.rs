//! Bedrock Knowledge Bases retriever
//!
//! Vector search over a managed knowledge base, implementing the
//! `KnowledgeRetriever` port. Scores are passed through unchanged.

use super::types;
use async_trait::async_trait;
use aws_sdk_bedrockagentruntime::Client as AgentRuntimeClient;
use aws_sdk_bedrockagentruntime::types::{
    KnowledgeBaseQuery, KnowledgeBaseRetrievalConfiguration,
    KnowledgeBaseVectorSearchConfiguration,
};
use helpdesk_application::{CapabilityError, KnowledgeRetriever, RetrievedPassage};
use tracing::debug;

pub struct BedrockKnowledgeRetriever {
    client: AgentRuntimeClient,
    knowledge_base_id: String,
}

impl BedrockKnowledgeRetriever {
    pub fn new(sdk_config: &aws_config::SdkConfig, knowledge_base_id: impl Into<String>) -> Self {
        Self {
            client: AgentRuntimeClient::new(sdk_config),
            knowledge_base_id: knowledge_base_id.into(),
        }
    }

    pub fn knowledge_base_id(&self) -> &str {
        &self.knowledge_base_id
    }
}

#[async_trait]
impl KnowledgeRetriever for BedrockKnowledgeRetriever {
    async fn retrieve(
        &self,
        query: &str,
        k: usize,
    ) -> Result<Vec<RetrievedPassage>, CapabilityError> {
        let retrieval_query = KnowledgeBaseQuery::builder()
            .text(query)
            .build();

        let number_of_results = i32::try_from(k).unwrap_or(i32::MAX);
        let retrieval_config = KnowledgeBaseRetrievalConfiguration::builder()
            .vector_search_configuration(
                KnowledgeBaseVectorSearchConfiguration::builder()
                    .number_of_results(number_of_results)
                    .build(),
            )
            .build();

        debug!(
            knowledge_base_id = %self.knowledge_base_id,
            k,
            "Calling Bedrock Retrieve API"
        );

        let response = self
            .client
            .retrieve()
            .knowledge_base_id(&self.knowledge_base_id)
            .retrieval_query(retrieval_query)
            .retrieval_configuration(retrieval_config)
            .send()
            .await
            .map_err(|e| types::convert_retrieve_error(&e))?;

        Ok(types::convert_retrieval_results(
            response.retrieval_results(),
        ))
    }
}
