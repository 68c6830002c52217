//! Tool trait.

use async_trait::async_trait;

use super::arguments::ToolArguments;
use super::types::ToolParameters;
use crate::error::ServerError;

/// Core tool trait — implement to expose an operation through the server.
#[async_trait]
pub trait Tool: Send + Sync {
    /// Tool name (what the client calls).
    fn name(&self) -> &str;

    /// Human-readable description.
    fn description(&self) -> &str;

    /// JSON Schema parameters.
    fn parameters(&self) -> &ToolParameters;

    /// Execute the tool with parsed arguments.
    async fn execute(&self, args: &ToolArguments) -> Result<serde_json::Value, ServerError>;
}
