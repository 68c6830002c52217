//! Tool system for the MCP surface.

pub mod arguments;
pub mod registry;
pub mod speech;
pub mod tool;
pub mod types;

pub use arguments::ToolArguments;
pub use registry::ToolRegistry;
pub use tool::Tool;
pub use types::ToolParameters;
