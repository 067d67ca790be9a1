//! Saved query context tool schemas.

use serde_json::{Value, json};

/// Schema definition for the context save tool.
pub fn save_context_tool() -> Value {
    json!({
        "name": "kentik_save_context",
        "description": "Save a named query context (device group + filters) for reuse. Contexts are stored in ~/.kentik-mcp-contexts.json and can be reapplied by name in later conversations.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Unique name for this context. E.g. 'borders', 'external-traffic', 'core-routers'."
                },
                "description": {
                    "type": "string",
                    "description": "Human-readable description of what this context covers."
                },
                "device_names": {
                    "type": "string",
                    "description": "Comma-delimited device names to save."
                },
                "site_name": {
                    "type": "string",
                    "description": "Site name to save."
                },
                "device_label": {
                    "type": "string",
                    "description": "Device label to save."
                },
                "dst_connect_type": {
                    "type": "string",
                    "description": "Destination connectivity type filter to save."
                },
                "src_connect_type": {
                    "type": "string",
                    "description": "Source connectivity type filter to save."
                },
                "port": {
                    "type": "string",
                    "description": "Port filter to save."
                },
                "dst_as": {
                    "type": "string",
                    "description": "Destination AS filter to save."
                },
                "src_as": {
                    "type": "string",
                    "description": "Source AS filter to save."
                }
            },
            "required": ["name"]
        }
    })
}

/// Schema definition for the context listing tool.
pub fn list_contexts_tool() -> Value {
    json!({
        "name": "kentik_list_contexts",
        "description": "List all saved query contexts. Shows the name, description, and parameters of each saved context.",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the context deletion tool.
pub fn delete_context_tool() -> Value {
    json!({
        "name": "kentik_delete_context",
        "description": "Delete a saved query context by name.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "name": {
                    "type": "string",
                    "description": "Name of the context to delete."
                }
            },
            "required": ["name"]
        }
    })
}
