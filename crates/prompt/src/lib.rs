//! # Prompt
//!
//! Message model for chat completion requests.
//!
//! A caller hands over a list of [`Message`]s, each either a bare string or an already structured
//! role/content entry. [`normalize_messages`] turns that list into the `messages` array sent to
//! the API:
//!
//! - **Text**: wrapped as `{"role": "user", "content": text}`.
//! - **Pair**: passed through verbatim. Role is an open string and nothing is validated here; an
//!   entry missing `role` or `content` is rejected by the remote endpoint, not locally.
//!
//! ## External interactions
//!
//! - **AI models**: Output is serialized into OpenAI-compatible chat completion requests.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// API `role` for system instructions.
pub const ROLE_SYSTEM: &str = "system";
/// API `role` for user messages; bare text is normalized to this role.
pub const ROLE_USER: &str = "user";
/// API `role` for assistant replies.
pub const ROLE_ASSISTANT: &str = "assistant";

/// A single chat message, one-to-one with one element of the OpenAI `messages` array.
///
/// Both fields are optional so a caller-supplied entry round-trips unchanged; absent fields are
/// omitted on the wire. Any extra fields (e.g. `name`) are kept as given. When parsed from JSON,
/// a `role` or `content` that is not a string (including an explicit `null`) stays in `extra`,
/// so it is sent back exactly as received.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(from = "Map<String, Value>")]
pub struct ChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl ChatMessage {
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: Some(role.into()),
            content: Some(content.into()),
            extra: Map::new(),
        }
    }

    pub fn system(content: impl Into<String>) -> Self {
        Self::new(ROLE_SYSTEM, content)
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ROLE_USER, content)
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ROLE_ASSISTANT, content)
    }

    /// True when both `role` and `content` are present.
    pub fn is_complete(&self) -> bool {
        self.role.is_some() && self.content.is_some()
    }
}

impl From<Map<String, Value>> for ChatMessage {
    fn from(mut fields: Map<String, Value>) -> Self {
        let role = take_string(&mut fields, "role");
        let content = take_string(&mut fields, "content");
        Self {
            role,
            content,
            extra: fields,
        }
    }
}

/// Removes `key` from `fields` if it holds a string; any other value is left in place.
fn take_string(fields: &mut Map<String, Value>, key: &str) -> Option<String> {
    match fields.remove(key) {
        Some(Value::String(s)) => Some(s),
        Some(other) => {
            fields.insert(key.to_string(), other);
            None
        }
        None => None,
    }
}

/// Caller input: either bare text or a structured role/content entry.
///
/// Deserializes untagged, so a JSON array like `["Hi", {"role": "system", "content": "Be terse"}]`
/// parses directly into `Vec<Message>`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Message {
    Text(String),
    Pair(ChatMessage),
}

impl Message {
    /// Converts into the API message shape. Text becomes a user message; a pair is returned as-is.
    pub fn into_chat_message(self) -> ChatMessage {
        match self {
            Message::Text(content) => ChatMessage::user(content),
            Message::Pair(message) => message,
        }
    }
}

impl From<&str> for Message {
    fn from(text: &str) -> Self {
        Message::Text(text.to_string())
    }
}

impl From<String> for Message {
    fn from(text: String) -> Self {
        Message::Text(text)
    }
}

impl From<ChatMessage> for Message {
    fn from(message: ChatMessage) -> Self {
        Message::Pair(message)
    }
}

/// Normalizes caller messages into API messages, preserving order and length.
pub fn normalize_messages<I, M>(messages: I) -> Vec<ChatMessage>
where
    I: IntoIterator<Item = M>,
    M: Into<Message>,
{
    messages
        .into_iter()
        .map(|m| m.into().into_chat_message())
        .collect()
}
