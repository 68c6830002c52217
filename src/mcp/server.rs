//! Stdio JSON-RPC server dispatching MCP requests to registered tools.

use serde_json::Value;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use super::protocol::{
    JsonRpcRequest, JsonRpcResponse, ToolSchema, INVALID_PARAMS, METHOD_NOT_FOUND, PARSE_ERROR,
    PROTOCOL_VERSION,
};
use crate::error::Result;
use crate::tools::{ToolArguments, ToolRegistry};

const SERVER_NAME: &str = "resemble-server";

/// MCP server over newline-delimited JSON-RPC. Requests are handled one at a
/// time in arrival order.
pub struct McpServer {
    name: String,
    version: String,
    registry: ToolRegistry,
}

impl McpServer {
    pub fn new(registry: ToolRegistry) -> Self {
        Self {
            name: SERVER_NAME.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            registry,
        }
    }

    /// Serve on the process's stdin and stdout. Logging must go to stderr —
    /// stdout carries the protocol.
    pub async fn run(&self) -> Result<()> {
        self.serve(tokio::io::stdin(), tokio::io::stdout()).await
    }

    /// Serve until the reader reaches EOF.
    pub async fn serve<R, W>(&self, reader: R, mut writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = BufReader::new(reader).lines();
        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            let Some(response) = self.handle_line(line).await else {
                continue;
            };

            let mut out = serde_json::to_string(&response)?;
            out.push('\n');
            writer.write_all(out.as_bytes()).await?;
            writer.flush().await?;
        }
        Ok(())
    }

    /// Handle one raw message. Returns `None` for notifications.
    pub async fn handle_line(&self, line: &str) -> Option<JsonRpcResponse> {
        let request: JsonRpcRequest = match serde_json::from_str(line) {
            Ok(request) => request,
            Err(error) => {
                warn!(target: "mcp", %error, "unparsable message");
                return Some(JsonRpcResponse::error(
                    Value::Null,
                    PARSE_ERROR,
                    format!("invalid JSON-RPC message: {error}"),
                ));
            }
        };

        let Some(id) = request.id.clone() else {
            debug!(target: "mcp", method = %request.method, "notification received");
            return None;
        };

        Some(self.handle_request(request, id).await)
    }

    async fn handle_request(&self, request: JsonRpcRequest, id: Value) -> JsonRpcResponse {
        debug!(target: "mcp", method = %request.method, "handling request");
        match request.method.as_str() {
            "initialize" => JsonRpcResponse::success(
                id,
                serde_json::json!({
                    "protocolVersion": PROTOCOL_VERSION,
                    "capabilities": { "tools": {} },
                    "serverInfo": { "name": self.name, "version": self.version },
                }),
            ),
            "ping" => JsonRpcResponse::success(id, serde_json::json!({})),
            "tools/list" => JsonRpcResponse::success(
                id,
                serde_json::json!({ "tools": self.tool_schemas() }),
            ),
            "tools/call" => self.handle_tool_call(id, request.params).await,
            other => JsonRpcResponse::error(
                id,
                METHOD_NOT_FOUND,
                format!("unknown method: {other}"),
            ),
        }
    }

    fn tool_schemas(&self) -> Vec<ToolSchema> {
        self.registry
            .tools()
            .into_iter()
            .map(|tool| ToolSchema {
                name: tool.name().to_string(),
                description: tool.description().to_string(),
                input_schema: tool.parameters().schema.clone(),
            })
            .collect()
    }

    async fn handle_tool_call(&self, id: Value, params: Option<Value>) -> JsonRpcResponse {
        let Some(params) = params else {
            return JsonRpcResponse::error(id, INVALID_PARAMS, "missing params");
        };
        let Some(name) = params.get("name").and_then(|v| v.as_str()) else {
            return JsonRpcResponse::error(id, INVALID_PARAMS, "missing tool name");
        };
        let Some(tool) = self.registry.get(name) else {
            return JsonRpcResponse::error(
                id,
                INVALID_PARAMS,
                format!("unknown tool: {name}"),
            );
        };

        let arguments = params
            .get("arguments")
            .cloned()
            .unwrap_or_else(|| serde_json::json!({}));

        match tool.execute(&ToolArguments::new(arguments)).await {
            Ok(value) => JsonRpcResponse::success(id, tool_result(value, false)),
            Err(error) => {
                warn!(target: "mcp", tool = name, %error, "tool execution failed");
                JsonRpcResponse::success(
                    id,
                    tool_result(Value::String(error.to_string()), true),
                )
            }
        }
    }
}

/// Wrap a tool's output in MCP `tools/call` result content. String results
/// pass through as-is; structured results are rendered as compact JSON.
fn tool_result(value: Value, is_error: bool) -> Value {
    let text = match value {
        Value::String(text) => text,
        other => other.to_string(),
    };
    serde_json::json!({
        "content": [{ "type": "text", "text": text }],
        "isError": is_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_tool_result_passes_through() {
        let wrapped = tool_result(Value::String("done".into()), false);
        assert_eq!(wrapped["content"][0]["text"], "done");
        assert_eq!(wrapped["isError"], false);
    }

    #[test]
    fn structured_tool_result_is_rendered_as_json() {
        let wrapped = tool_result(serde_json::json!({"error": "nope"}), true);
        assert_eq!(wrapped["content"][0]["text"], r#"{"error":"nope"}"#);
        assert_eq!(wrapped["isError"], true);
    }
}
