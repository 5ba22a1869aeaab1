//! LLM configuration: trait and env-based implementation.

use std::env;

use crate::error::{LlmError, Result};

/// Default OpenAI-compatible API base.
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Chat model used when the caller does not name one.
pub const DEFAULT_CHAT_MODEL: &str = "gpt-4.1";

/// Embedding model used when the caller does not name one.
pub const DEFAULT_EMBEDDING_MODEL: &str = "text-embedding-3-small";

/// LLM configuration interface for OpenAI-compatible APIs.
pub trait LlmConfig: Send + Sync {
    fn api_key(&self) -> &str;
    fn base_url(&self) -> &str;
    fn chat_model(&self) -> &str;
    fn embedding_model(&self) -> &str;
}

/// LLM config loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnvLlmConfig {
    pub openai_api_key: String,
    pub openai_base_url: String,
    pub chat_model: String,
    pub embedding_model: String,
}

impl LlmConfig for EnvLlmConfig {
    fn api_key(&self) -> &str {
        &self.openai_api_key
    }
    fn base_url(&self) -> &str {
        &self.openai_base_url
    }
    fn chat_model(&self) -> &str {
        &self.chat_model
    }
    fn embedding_model(&self) -> &str {
        &self.embedding_model
    }
}

impl EnvLlmConfig {
    /// Load from environment variables. Call `dotenvy::dotenv()` first to pick up a local `.env`.
    ///
    /// `OPENAI_API_KEY` is required; `OPENAI_BASE_URL`, `CHAT_MODEL` and `EMBEDDING_MODEL` fall back to defaults.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|s| !s.trim().is_empty());

        let openai_api_key = get("OPENAI_API_KEY")
            .ok_or_else(|| LlmError::Config("OPENAI_API_KEY not set".to_string()))?;
        let openai_base_url =
            get("OPENAI_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let chat_model = get("CHAT_MODEL").unwrap_or_else(|| DEFAULT_CHAT_MODEL.to_string());
        let embedding_model =
            get("EMBEDDING_MODEL").unwrap_or_else(|| DEFAULT_EMBEDDING_MODEL.to_string());

        Ok(Self {
            openai_api_key,
            openai_base_url,
            chat_model,
            embedding_model,
        })
    }
}
