use std::sync::Arc;

use async_trait::async_trait;
use llm_core::{LlmConfig, Result};
use openai_client::OpenAIClient;

use crate::{get_embedding, EmbeddingBackend, EmbeddingService, DEFAULT_EMBEDDING_MODEL};

/// Embedding service bound to one backend and model.
#[derive(Clone)]
pub struct OpenAIEmbedding {
    backend: Arc<dyn EmbeddingBackend>,
    /// Embedding model name (e.g. "text-embedding-3-small").
    model: String,
}

impl OpenAIEmbedding {
    pub fn new(backend: Arc<dyn EmbeddingBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    /// Uses `client` with [`DEFAULT_EMBEDDING_MODEL`].
    pub fn with_client(client: OpenAIClient) -> Self {
        Self::new(Arc::new(client), DEFAULT_EMBEDDING_MODEL)
    }

    /// Uses `client` with the embedding model from `config`.
    pub fn from_config(client: OpenAIClient, config: &dyn LlmConfig) -> Self {
        Self::new(Arc::new(client), config.embedding_model())
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl EmbeddingService for OpenAIEmbedding {
    async fn embed(&self, text: &str) -> Result<Vec<f32>> {
        get_embedding(self.backend.as_ref(), text, Some(self.model.as_str())).await
    }
}
