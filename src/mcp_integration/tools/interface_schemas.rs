//! Interface tool schemas.

use serde_json::{Value, json};

/// Schema definition for the per-device interface listing tool.
pub fn list_interfaces_tool() -> Value {
    json!({
        "name": "kentik_list_interfaces",
        "description": "List all interfaces on a specific Kentik device.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "device_id": {
                    "type": "string",
                    "description": "The ID of the device whose interfaces to list"
                }
            },
            "required": ["device_id"]
        }
    })
}

/// Schema definition for the fleet-wide interface listing tool.
pub fn list_all_interfaces_tool() -> Value {
    json!({
        "name": "kentik_list_all_interfaces",
        "description": "List all interfaces across all Kentik devices. Fetches devices first, then queries interfaces for each device concurrently (respecting rate limits). Returns a JSON array with device_id, device_name, and interfaces for each device.",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the single-interface lookup tool.
pub fn get_interface_tool() -> Value {
    json!({
        "name": "kentik_get_interface",
        "description": "Get detailed information about a specific interface on a device.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "device_id": {
                    "type": "string",
                    "description": "The ID of the device"
                },
                "interface_id": {
                    "type": "string",
                    "description": "The ID of the interface"
                }
            },
            "required": ["device_id", "interface_id"]
        }
    })
}
