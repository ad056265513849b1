mod api;
mod config;
mod error;
mod server;

use rmcp::{ServiceExt, transport::stdio};
use tracing::info;
use tracing_subscriber::EnvFilter;

use config::Config;
use help_kb::corpus::ArticleCorpus;
use server::CarlosAssistantServer;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing to stderr (stdout is reserved for MCP JSON-RPC)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    info!("starting carlos-assistant MCP server");

    // 1. Load config from environment
    let config = Config::from_env()?;
    info!(kb_path = %config.kb_path, "configuration loaded");

    // 2. Load and validate the article corpus — a malformed corpus
    //    (duplicate id, tagless article) is fatal here, never at query time
    let corpus = ArticleCorpus::load(&config.kb_path)?;
    info!(articles = corpus.len(), "help article corpus loaded");

    // 3. Build MCP server and serve on stdio
    let server = CarlosAssistantServer::new(corpus);

    info!("MCP server ready, serving on stdio");
    let service = server.serve(stdio()).await.inspect_err(|e| {
        tracing::error!(error = %e, "MCP server error");
    })?;

    service.waiting().await?;
    info!("MCP server shut down");
    Ok(())
}
