//! # llm-core
//!
//! Shared pieces for the chat and embedding wrappers: the [`LlmError`] type, env-based
//! [`EnvLlmConfig`], and tracing initialization.

pub mod config;
pub mod error;
pub mod logger;

pub use config::{
    EnvLlmConfig, LlmConfig, DEFAULT_BASE_URL, DEFAULT_CHAT_MODEL, DEFAULT_EMBEDDING_MODEL,
};
pub use error::{LlmError, Result};
pub use logger::init_tracing;
