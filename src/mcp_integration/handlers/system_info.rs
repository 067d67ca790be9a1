//! System information handler.

use crate::contexts::ContextStore;
use crate::gateway::ApiGateway;
use crate::mcp_integration::core::{KentikMcpServer, ToolResult};
use crate::mcp_integration::handlers::format_json;
use serde_json::{Value, json};

/// Handle the server info request.
pub async fn handle_server_info<G, S>(
    server: &KentikMcpServer<G, S>,
    _arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let info = server.server_info();
    ToolResult::text(format_json(&json!({
        "name": info.name,
        "version": info.version,
        "instructions": info.instructions,
        "tool_count": server.get_tools().len(),
    })))
}
