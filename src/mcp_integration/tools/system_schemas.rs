//! System information tool schema.

use serde_json::{Value, json};

/// Schema definition for the server info tool.
pub fn server_info_tool() -> Value {
    json!({
        "name": "kentik_server_info",
        "description": "Get information about this MCP server: name, version, and capabilities.",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}
