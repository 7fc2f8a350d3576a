//! Tutorly server binary.

use anyhow::{Context, Result};
use clap::Parser;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tutorly::api::{start_server, AppState};
use tutorly::cache::ResultCache;
use tutorly::config::Config;
use tutorly::learning::ContentPipeline;
use tutorly::providers::{GeminiProvider, GenerationClient, RetryPolicy};

/// AI-generated explanations, analogies and quizzes for any topic.
#[derive(Parser, Debug)]
#[command(name = "tutorly", version, about)]
struct Cli {
    /// Bind address (overrides HOST)
    #[arg(long)]
    host: Option<String>,
    /// Listen port (overrides PORT)
    #[arg(long, short)]
    port: Option<u16>,
    /// Emit logs as JSON lines
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt().with_env_filter(filter);
    if json {
        builder.json().init();
    } else {
        builder.init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env file is fine; real environment variables still apply.
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    init_tracing(cli.json_logs);

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    let provider = GeminiProvider::new(
        &config.provider.api_key,
        &config.provider.model,
        config.provider.timeout(),
    )
    .context("Failed to initialize Gemini provider")?;
    info!(model = %config.provider.model, "Gemini provider ready");

    let client = GenerationClient::new(Arc::new(provider), RetryPolicy::default());
    let pipeline = ContentPipeline::new(client, Arc::new(ResultCache::new()));
    let state = AppState::new(Arc::new(pipeline), config.server.templates_dir.clone());

    start_server(&config.server, state)
        .await
        .context("API server failed")?;
    Ok(())
}
