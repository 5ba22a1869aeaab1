//! CLI parser and input loading.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use prompt::{ChatMessage, Message};
use serde_json::Value;

#[derive(Parser)]
#[command(name = "llm")]
#[command(about = "Chat completions and embeddings against an OpenAI-compatible API", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Also append logs to this file.
    #[arg(long, global = true)]
    pub log_file: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Send messages and print the reply (pretty JSON when --schema is given).
    Chat {
        /// Model name; defaults to CHAT_MODEL or gpt-4.1.
        #[arg(short, long)]
        model: Option<String>,
        /// System message placed first.
        #[arg(short, long)]
        system: Option<String>,
        /// JSON array of strings and {"role", "content"} objects, sent before MESSAGE args.
        #[arg(long)]
        messages_file: Option<PathBuf>,
        /// JSON file with the output schema; switches to structured output.
        #[arg(long)]
        schema: Option<PathBuf>,
        /// User messages.
        messages: Vec<String>,
    },
    /// Print the embedding vector of TEXT as a JSON array.
    Embed {
        /// Model name; defaults to EMBEDDING_MODEL or text-embedding-3-small.
        #[arg(short, long)]
        model: Option<String>,
        /// Print only the vector dimension.
        #[arg(long)]
        dimension_only: bool,
        text: String,
    },
}

/// Collects chat input in order: system message, messages file entries, then bare MESSAGE args.
pub fn collect_messages(
    system: Option<String>,
    messages_file: Option<&Path>,
    messages: Vec<String>,
) -> Result<Vec<Message>> {
    let mut out = Vec::new();
    if let Some(system) = system {
        out.push(Message::Pair(ChatMessage::system(system)));
    }
    if let Some(path) = messages_file {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading messages file {}", path.display()))?;
        let parsed: Vec<Message> = serde_json::from_str(&raw)
            .with_context(|| format!("parsing messages file {}", path.display()))?;
        out.extend(parsed);
    }
    out.extend(messages.into_iter().map(Message::Text));
    if out.is_empty() {
        anyhow::bail!("no messages given");
    }
    Ok(out)
}

/// Reads the output schema; its shape is not checked.
pub fn load_schema(path: &Path) -> Result<Value> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("reading schema file {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing schema file {}", path.display()))
}
