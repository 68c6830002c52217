//! Resemble MCP — an MCP server bridging the Resemble AI text-to-speech API.
//!
//! Exposes two tools over a stdio JSON-RPC transport: `generate_tts`
//! (synthesize text into an audio file) and `list_voices` (page through the
//! remote voice catalog). The HTTP bridging lives in [`resemble`], the tool
//! surface in [`tools`], and the serving loop in [`mcp`].
//!
//! # Quick Start
//!
//! ```no_run
//! use std::sync::Arc;
//!
//! use resemble_mcp::config::ResembleConfig;
//! use resemble_mcp::mcp::McpServer;
//! use resemble_mcp::resemble::ResembleClient;
//! use resemble_mcp::tools::speech::{GenerateTtsTool, ListVoicesTool};
//! use resemble_mcp::tools::ToolRegistry;
//!
//! # async fn example() -> resemble_mcp::error::Result<()> {
//! let client = Arc::new(ResembleClient::new(ResembleConfig::from_env()));
//!
//! let mut registry = ToolRegistry::new();
//! registry.register(Arc::new(GenerateTtsTool::new(client.clone())));
//! registry.register(Arc::new(ListVoicesTool::new(client)));
//!
//! McpServer::new(registry).run().await?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod mcp;
pub mod resemble;
pub mod tools;
pub mod util;
