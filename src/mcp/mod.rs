//! MCP protocol types and the stdio serving loop.

pub mod protocol;
pub mod server;

pub use protocol::{JsonRpcError, JsonRpcRequest, JsonRpcResponse, ToolSchema, PROTOCOL_VERSION};
pub use server::McpServer;
