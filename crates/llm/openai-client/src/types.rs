//! Chat completion wire types: the request subset this crate populates and the response fields it reads.

use prompt::ChatMessage;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    /// Present only in structured-output mode.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_format: Option<ResponseFormat>,
}

/// Structured-output constraint. The schema descriptor is passed through opaquely.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ResponseFormat {
    JsonSchema { json_schema: Value },
}

impl ResponseFormat {
    pub fn json_schema(schema: Value) -> Self {
        ResponseFormat::JsonSchema {
            json_schema: schema,
        }
    }

    /// The schema descriptor carried by this format.
    pub fn schema(&self) -> &Value {
        match self {
            ResponseFormat::JsonSchema { json_schema } => json_schema,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<CompletionUsage>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChatChoice {
    #[serde(default)]
    pub index: u32,
    pub message: ResponseMessage,
    #[serde(default)]
    pub finish_reason: Option<String>,
}

/// Assistant message of a choice. `parsed` is filled by providers that return the structured value
/// directly; otherwise structured output arrives as JSON text in `content`.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub parsed: Option<Value>,
    #[serde(default)]
    pub refusal: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct CompletionUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
    pub total_tokens: u32,
}

impl ChatCompletionResponse {
    /// Response with a single choice carrying `message`.
    pub fn from_message(message: ResponseMessage) -> Self {
        Self {
            id: None,
            model: None,
            choices: vec![ChatChoice {
                index: 0,
                message,
                finish_reason: Some("stop".to_string()),
            }],
            usage: None,
        }
    }
}
