use llm_core::{LlmError, Result, DEFAULT_CHAT_MODEL};
use openai_client::{ChatCompletionRequest, ChatCompletionResponse, ResponseFormat, ResponseMessage};
use prompt::{normalize_messages, Message};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::{debug, instrument};

use crate::{ChatBackend, ChatOutput};

/// Builds the request payload: model (default [`DEFAULT_CHAT_MODEL`]), normalized messages, and
/// the schema under `response_format` when given.
pub fn build_chat_request<I, M>(
    messages: I,
    model: Option<&str>,
    output_schema: Option<Value>,
) -> ChatCompletionRequest
where
    I: IntoIterator<Item = M>,
    M: Into<Message>,
{
    ChatCompletionRequest {
        model: model.unwrap_or(DEFAULT_CHAT_MODEL).to_string(),
        messages: normalize_messages(messages),
        response_format: output_schema.map(ResponseFormat::json_schema),
    }
}

fn first_message(response: ChatCompletionResponse) -> Result<ResponseMessage> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| choice.message)
        .ok_or(LlmError::EmptyChoices)
}

/// Content of the first choice.
pub fn extract_text(response: ChatCompletionResponse) -> Result<String> {
    first_message(response)?
        .content
        .ok_or(LlmError::MissingContent)
}

/// Structured value of the first choice: the provider's `parsed` field when present, otherwise
/// the content parsed as JSON.
pub fn extract_structured(response: ChatCompletionResponse) -> Result<Value> {
    let message = first_message(response)?;
    if let Some(parsed) = message.parsed {
        return Ok(parsed);
    }
    let content = message.content.ok_or(LlmError::MissingStructured)?;
    Ok(serde_json::from_str(&content)?)
}

/// Sends `messages` and returns the reply text.
#[instrument(skip(backend, messages))]
pub async fn chat_text<I, M>(
    backend: &dyn ChatBackend,
    messages: I,
    model: Option<&str>,
) -> Result<String>
where
    I: IntoIterator<Item = M>,
    M: Into<Message>,
{
    let request = build_chat_request(messages, model, None);
    debug!(model = %request.model, message_count = request.messages.len(), "chat_text");
    let response = backend.create_chat_completion(request).await?;
    extract_text(response)
}

/// Sends `messages` constrained by `output_schema` and returns the structured reply.
#[instrument(skip(backend, messages, output_schema))]
pub async fn chat_structured<I, M>(
    backend: &dyn ChatBackend,
    messages: I,
    model: Option<&str>,
    output_schema: Value,
) -> Result<Value>
where
    I: IntoIterator<Item = M>,
    M: Into<Message>,
{
    let request = build_chat_request(messages, model, Some(output_schema));
    debug!(model = %request.model, message_count = request.messages.len(), "chat_structured");
    let response = backend.create_chat_completion(request).await?;
    extract_structured(response)
}

/// [`chat_structured`], then deserialized into `T`.
pub async fn chat_structured_as<T, I, M>(
    backend: &dyn ChatBackend,
    messages: I,
    model: Option<&str>,
    output_schema: Value,
) -> Result<T>
where
    T: DeserializeOwned,
    I: IntoIterator<Item = M>,
    M: Into<Message>,
{
    let value = chat_structured(backend, messages, model, output_schema).await?;
    Ok(serde_json::from_value(value)?)
}

/// Combined entry point: text when `output_schema` is `None`, structured value otherwise.
/// A `null` or empty-object schema counts as no schema. The branch depends only on the argument,
/// never on the response.
pub async fn chat<I, M>(
    backend: &dyn ChatBackend,
    messages: I,
    model: Option<&str>,
    output_schema: Option<Value>,
) -> Result<ChatOutput>
where
    I: IntoIterator<Item = M>,
    M: Into<Message>,
{
    match output_schema.filter(|schema| !is_empty_schema(schema)) {
        Some(schema) => chat_structured(backend, messages, model, schema)
            .await
            .map(ChatOutput::Structured),
        None => chat_text(backend, messages, model)
            .await
            .map(ChatOutput::Text),
    }
}

fn is_empty_schema(schema: &Value) -> bool {
    match schema {
        Value::Null => true,
        Value::Object(fields) => fields.is_empty(),
        _ => false,
    }
}
