//! llm-cli: wires the chat and embedding operations to the command line.

pub mod cli;

use anyhow::Result;
use embedding::{get_embedding, EmbeddingBackend};
use llm_client::{chat, ChatBackend, ChatOutput};
use llm_core::LlmConfig;
use prompt::Message;
use serde_json::Value;

pub use cli::{collect_messages, load_schema, Cli, Commands};

/// Runs one chat request and renders the reply: text as-is, structured output as pretty JSON.
pub async fn run_chat(
    backend: &dyn ChatBackend,
    config: &dyn LlmConfig,
    messages: Vec<Message>,
    model: Option<String>,
    schema: Option<Value>,
) -> Result<String> {
    let model = model.unwrap_or_else(|| config.chat_model().to_string());
    let output = chat(backend, messages, Some(model.as_str()), schema).await?;
    Ok(match output {
        ChatOutput::Text(text) => text,
        ChatOutput::Structured(value) => serde_json::to_string_pretty(&value)?,
    })
}

/// Runs one embedding request and renders the vector as JSON, or only its dimension.
pub async fn run_embed(
    backend: &dyn EmbeddingBackend,
    config: &dyn LlmConfig,
    text: &str,
    model: Option<String>,
    dimension_only: bool,
) -> Result<String> {
    let model = model.unwrap_or_else(|| config.embedding_model().to_string());
    let vector = get_embedding(backend, text, Some(model.as_str())).await?;
    if dimension_only {
        Ok(vector.len().to_string())
    } else {
        Ok(serde_json::to_string(&vector)?)
    }
}
