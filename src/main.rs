//! Resemble MCP server binary entry point.

use std::sync::Arc;

use resemble_mcp::config::ResembleConfig;
use resemble_mcp::mcp::McpServer;
use resemble_mcp::resemble::ResembleClient;
use resemble_mcp::tools::speech::{GenerateTtsTool, ListVoicesTool};
use resemble_mcp::tools::ToolRegistry;
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    // Stdout carries the JSON-RPC transport; all diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ResembleConfig::from_env();
    if !config.has_credentials() {
        warn!("RESEMBLE_API_KEY is not set; requests will fail until it is configured");
        warn!("Set it using: export RESEMBLE_API_KEY='your-api-key'");
    }

    let client = Arc::new(ResembleClient::new(config));

    let mut registry = ToolRegistry::new();
    registry.register(Arc::new(GenerateTtsTool::new(client.clone())));
    registry.register(Arc::new(ListVoicesTool::new(client)));

    let server = McpServer::new(registry);
    if let Err(e) = server.run().await {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
