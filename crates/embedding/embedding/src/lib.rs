//! # Text Embeddings
//!
//! [`get_embedding`] sends one text to an [`EmbeddingBackend`] and returns the vector of the first
//! result entry. The vector length is whatever the model produces; it is not checked here.
//!
//! [`OpenAIEmbedding`] bundles a backend with a model for callers that want an
//! [`EmbeddingService`] object instead of the free function.

use async_openai::types::{CreateEmbeddingRequest, CreateEmbeddingRequestArgs, CreateEmbeddingResponse};
use async_trait::async_trait;
use llm_core::{LlmError, Result};
use openai_client::OpenAIClient;
use tracing::{info, instrument, warn};

mod openai;

pub use llm_core::DEFAULT_EMBEDDING_MODEL;
pub use openai::OpenAIEmbedding;

/// One embedding round trip.
#[async_trait]
pub trait EmbeddingBackend: Send + Sync {
    async fn create_embedding(&self, request: CreateEmbeddingRequest)
        -> Result<CreateEmbeddingResponse>;
}

#[async_trait]
impl EmbeddingBackend for OpenAIClient {
    async fn create_embedding(
        &self,
        request: CreateEmbeddingRequest,
    ) -> Result<CreateEmbeddingResponse> {
        OpenAIClient::create_embedding(self, request).await
    }
}

/// Service for generating text embeddings with a configured model.
#[async_trait]
pub trait EmbeddingService: Send + Sync {
    /// Generates an embedding vector for a single text string.
    async fn embed(&self, text: &str) -> Result<Vec<f32>>;
}

/// Returns the embedding vector for `text`, using `model` or [`DEFAULT_EMBEDDING_MODEL`].
///
/// Fails when the call fails or the response carries no entries.
#[instrument(skip(backend, text), fields(text_len = text.len()))]
pub async fn get_embedding(
    backend: &dyn EmbeddingBackend,
    text: &str,
    model: Option<&str>,
) -> Result<Vec<f32>> {
    let model = model.unwrap_or(DEFAULT_EMBEDDING_MODEL);
    let request = CreateEmbeddingRequestArgs::default()
        .model(model)
        .input(text)
        .build()?;

    let response = backend.create_embedding(request).await?;

    let embedding = match response.data.into_iter().next() {
        Some(item) => item.embedding,
        None => {
            warn!(model = %model, "embedding response has no data");
            return Err(LlmError::EmptyEmbedding);
        }
    };

    info!(model = %model, dimension = embedding.len(), "embedding done");
    Ok(embedding)
}
