//! Tests for `run_chat` / `run_embed` output rendering with stub backends.

use async_openai::types::{CreateEmbeddingRequest, CreateEmbeddingResponse};
use async_trait::async_trait;
use embedding::EmbeddingBackend;
use llm_cli::{run_chat, run_embed};
use llm_client::ChatBackend;
use llm_core::{EnvLlmConfig, Result};
use openai_client::{ChatCompletionRequest, ChatCompletionResponse, ResponseMessage};
use prompt::Message;
use serde_json::json;

/// Echoes the request model back as content, or `parsed` when a schema was sent.
struct EchoChat;

#[async_trait]
impl ChatBackend for EchoChat {
    async fn create_chat_completion(
        &self,
        request: ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse> {
        let message = match request.response_format {
            Some(_) => ResponseMessage {
                parsed: Some(json!({"model": request.model})),
                ..Default::default()
            },
            None => ResponseMessage {
                content: Some(request.model),
                ..Default::default()
            },
        };
        Ok(ChatCompletionResponse::from_message(message))
    }
}

struct FixedEmbedding;

#[async_trait]
impl EmbeddingBackend for FixedEmbedding {
    async fn create_embedding(
        &self,
        request: CreateEmbeddingRequest,
    ) -> Result<CreateEmbeddingResponse> {
        Ok(serde_json::from_value(json!({
            "object": "list",
            "model": request.model,
            "data": [{"object": "embedding", "index": 0, "embedding": [0.5, 1.0, 2.0]}],
            "usage": {"prompt_tokens": 1, "total_tokens": 1}
        }))?)
    }
}

fn config() -> EnvLlmConfig {
    EnvLlmConfig {
        openai_api_key: "sk-test".to_string(),
        openai_base_url: "http://localhost".to_string(),
        chat_model: "config-chat".to_string(),
        embedding_model: "config-embed".to_string(),
    }
}

#[tokio::test]
async fn run_chat_uses_config_model_and_prints_text() {
    let out = run_chat(&EchoChat, &config(), vec![Message::from("hi")], None, None)
        .await
        .unwrap();
    assert_eq!(out, "config-chat");
}

#[tokio::test]
async fn run_chat_structured_prints_pretty_json() {
    let out = run_chat(
        &EchoChat,
        &config(),
        vec![Message::from("hi")],
        Some("cli-model".to_string()),
        Some(json!({"name": "x"})),
    )
    .await
    .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed, json!({"model": "cli-model"}));
    assert!(out.contains('\n'));
}

#[tokio::test]
async fn run_embed_renders_vector_or_dimension() {
    let out = run_embed(&FixedEmbedding, &config(), "hi", None, false)
        .await
        .unwrap();
    assert_eq!(out, "[0.5,1.0,2.0]");

    let out = run_embed(&FixedEmbedding, &config(), "hi", None, true)
        .await
        .unwrap();
    assert_eq!(out, "3");
}
