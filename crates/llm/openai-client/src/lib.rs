//! # OpenAI API client
//!
//! The one long-lived client handle shared by chat and embedding calls. Chat completions are sent
//! as raw JSON over `reqwest` so caller messages (open roles, extra fields) reach the API
//! unchanged; embeddings go through [async-openai] on the same HTTP connection pool.
//! Provides token masking for safe logging.

use std::sync::Arc;

use async_openai::{
    config::OpenAIConfig,
    types::{CreateEmbeddingRequest, CreateEmbeddingResponse},
    Client,
};
use llm_core::{LlmConfig, LlmError, Result, DEFAULT_BASE_URL};
use tracing::{debug, info, instrument, warn};

mod types;

pub use types::{
    ChatChoice, ChatCompletionRequest, ChatCompletionResponse, CompletionUsage, ResponseFormat,
    ResponseMessage,
};

/// Masks an API key/token for safe logging: shows first 7 chars + "***" + last 4 chars.
/// If length <= 11, returns "***" to avoid leaking any part of the key.
pub fn mask_token(token: &str) -> String {
    let len = token.len();
    if len <= 11 || !token.is_char_boundary(7) || !token.is_char_boundary(len - 4) {
        "***".to_string()
    } else {
        format!("{}***{}", &token[..7], &token[len - 4..])
    }
}

/// OpenAI-compatible client. Cheap to clone; clones share the connection pool.
#[derive(Clone)]
pub struct OpenAIClient {
    http: reqwest::Client,
    /// async-openai client on top of `http`, used for embeddings.
    client: Arc<Client<OpenAIConfig>>,
    api_key: Arc<str>,
    base_url: Arc<str>,
}

impl std::fmt::Debug for OpenAIClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OpenAIClient")
            .field("api_key", &mask_token(&self.api_key))
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl OpenAIClient {
    /// Builds a client using the given API key and default API base URL.
    pub fn new(api_key: String) -> Self {
        Self::with_base_url(api_key, DEFAULT_BASE_URL.to_string())
    }

    /// Builds a client with a custom base URL (e.g. for proxies or compatible endpoints).
    pub fn with_base_url(api_key: String, base_url: String) -> Self {
        let base_url = base_url.trim_end_matches('/').to_string();
        let http = reqwest::Client::new();
        let config = OpenAIConfig::new()
            .with_api_key(api_key.clone())
            .with_api_base(base_url.clone());
        let client = Client::with_config(config).with_http_client(http.clone());
        Self {
            http,
            client: Arc::new(client),
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Builds a client from API key and base URL in `config`.
    pub fn from_config(config: &dyn LlmConfig) -> Self {
        Self::with_base_url(config.api_key().to_string(), config.base_url().to_string())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Sends one chat completion request and returns the decoded response.
    ///
    /// Non-2xx statuses become [`LlmError::Api`] with the response body. The response is not
    /// inspected beyond decoding; choosing text vs structured output is up to the caller.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        info!(
            message_count = request.messages.len(),
            structured = request.response_format.is_some(),
            api_key = %mask_token(&self.api_key),
            "OpenAI chat_completion request"
        );

        if let Ok(json) = serde_json::to_string_pretty(request) {
            debug!(request_json = %json, "OpenAI chat_completion request JSON");
        }

        let url = format!("{}/chat/completions", self.base_url);
        let response = self
            .http
            .post(&url)
            .bearer_auth(&*self.api_key)
            .json(request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(error = %e, "OpenAI chat_completion error body unreadable");
                    String::new()
                }
            };
            warn!(status = status.as_u16(), "OpenAI chat_completion request failed");
            return Err(LlmError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let response: ChatCompletionResponse = response.json().await?;

        if let Some(ref u) = response.usage {
            info!(
                prompt_tokens = u.prompt_tokens,
                completion_tokens = u.completion_tokens,
                total_tokens = u.total_tokens,
                "OpenAI chat_completion usage"
            );
        }
        debug!(choices = response.choices.len(), "OpenAI chat_completion response received");

        Ok(response)
    }

    /// Sends one embedding request through async-openai.
    #[instrument(skip(self, request), fields(model = %request.model))]
    pub async fn create_embedding(
        &self,
        request: CreateEmbeddingRequest,
    ) -> Result<CreateEmbeddingResponse> {
        info!(
            api_key = %mask_token(&self.api_key),
            "OpenAI embedding request"
        );
        let response = self.client.embeddings().create(request).await.map_err(|e| {
            warn!(error = %e, "OpenAI embedding request failed");
            LlmError::from(e)
        })?;
        debug!(entries = response.data.len(), "OpenAI embedding response received");
        Ok(response)
    }
}
