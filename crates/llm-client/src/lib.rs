//! # LLM chat client
//!
//! Defines the [`ChatBackend`] trait (one chat completion round trip) and the chat operations
//! built on it. [`openai_client::OpenAIClient`] implements the trait; tests substitute mocks.
//!
//! Two decoding paths, chosen by the caller:
//!
//! - [`chat_text`]: plain text from the first choice.
//! - [`chat_structured`] / [`chat_structured_as`]: request constrained by a schema, result
//!   decoded as structured data.
//!
//! [`chat`] keeps the combined surface and picks the path from whether a schema was given.

use async_trait::async_trait;
use llm_core::Result;
use openai_client::{ChatCompletionRequest, ChatCompletionResponse};
use serde_json::Value;

mod chat;
mod openai_llm;

pub use chat::{
    build_chat_request, chat, chat_structured, chat_structured_as, chat_text, extract_structured,
    extract_text,
};
pub use llm_core::DEFAULT_CHAT_MODEL;

/// One chat completion round trip. No retry, no streaming.
#[async_trait]
pub trait ChatBackend: Send + Sync {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse>;
}

/// Result of [`chat`]: text when no schema was given, structured value otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatOutput {
    Text(String),
    Structured(Value),
}

impl ChatOutput {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            ChatOutput::Text(s) => Some(s),
            ChatOutput::Structured(_) => None,
        }
    }

    pub fn as_structured(&self) -> Option<&Value> {
        match self {
            ChatOutput::Text(_) => None,
            ChatOutput::Structured(v) => Some(v),
        }
    }
}
