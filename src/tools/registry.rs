//! Name-to-tool registry backing the MCP surface.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::debug;

use super::tool::Tool;

/// Registry of the tools the server exposes. Built once at startup and
/// read-only while serving.
#[derive(Default)]
pub struct ToolRegistry {
    tools: HashMap<String, Arc<dyn Tool>>,
}

impl ToolRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a tool under its own name. A later registration with the
    /// same name replaces the earlier one.
    pub fn register(&mut self, tool: Arc<dyn Tool>) {
        debug!(target: "tool_registry", tool = tool.name(), "registering tool");
        self.tools.insert(tool.name().to_string(), tool);
    }

    /// Get a tool by name.
    pub fn get(&self, name: &str) -> Option<Arc<dyn Tool>> {
        self.tools.get(name).cloned()
    }

    /// All registered tools, sorted by name for stable listings.
    pub fn tools(&self) -> Vec<Arc<dyn Tool>> {
        let mut tools: Vec<_> = self.tools.values().cloned().collect();
        tools.sort_by(|a, b| a.name().cmp(b.name()));
        tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}
