//! llm CLI: chat completion or embedding for one input. Config from env (and a local `.env`).

use anyhow::Result;
use clap::Parser;
use llm_cli::{collect_messages, load_schema, run_chat, run_embed, Cli, Commands};
use llm_core::{init_tracing, EnvLlmConfig};
use openai_client::OpenAIClient;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.log_file.as_deref())?;

    let config = EnvLlmConfig::from_env()?;
    let client = OpenAIClient::from_config(&config);
    tracing::debug!(?client, "client ready");

    let output = match cli.command {
        Commands::Chat {
            model,
            system,
            messages_file,
            schema,
            messages,
        } => {
            let messages = collect_messages(system, messages_file.as_deref(), messages)?;
            let schema = schema.as_deref().map(load_schema).transpose()?;
            run_chat(&client, &config, messages, model, schema).await?
        }
        Commands::Embed {
            model,
            dimension_only,
            text,
        } => run_embed(&client, &config, &text, model, dimension_only).await?,
    };

    println!("{}", output);
    Ok(())
}
