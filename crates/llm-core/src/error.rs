use thiserror::Error;

/// Errors surfaced by the chat and embedding wrappers.
///
/// Transport errors are wrapped transparently so the caller sees the underlying message unchanged.
#[derive(Error, Debug)]
pub enum LlmError {
    #[error(transparent)]
    Http(#[from] reqwest::Error),

    #[error(transparent)]
    OpenAI(#[from] async_openai::error::OpenAIError),

    #[error("API error ({status}): {body}")]
    Api { status: u16, body: String },

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error("No choices in chat completion response")]
    EmptyChoices,

    #[error("No content in chat completion message")]
    MissingContent,

    #[error("No structured value in chat completion message")]
    MissingStructured,

    #[error("No embedding in response")]
    EmptyEmbedding,

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, LlmError>;
