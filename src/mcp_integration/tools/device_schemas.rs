//! Device tool schemas.
//!
//! Three tools cover the device inventory: a full listing, a filtered
//! summary search (much cheaper for agents that know what they are looking
//! for), and a single-device lookup.

use serde_json::{Value, json};

/// Schema definition for the device listing tool.
pub fn list_devices_tool() -> Value {
    json!({
        "name": "kentik_list_devices",
        "description": "List all devices registered in Kentik. Returns device names, IPs, types, and configuration.",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the device search tool.
pub fn search_devices_tool() -> Value {
    json!({
        "name": "kentik_search_devices",
        "description": "Search and filter Kentik devices by name, site, type, or label. Returns a summarized table of matching devices with ID, name, site, type, status, and SNMP IP. Much more efficient than listing all devices when you know what you're looking for.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "name_filter": {
                    "type": "string",
                    "description": "Filter devices by name (case-insensitive substring match). E.g. 'bdr' for border routers, 'core' for core routers, 'sw' for switches."
                },
                "site_filter": {
                    "type": "string",
                    "description": "Filter devices by site name (case-insensitive substring match). E.g. 'NYC', 'LAX', 'AMS'."
                },
                "type_filter": {
                    "type": "string",
                    "description": "Filter devices by type/subtype (case-insensitive substring match). E.g. 'router', 'host', 'switch'."
                },
                "label_filter": {
                    "type": "string",
                    "description": "Filter devices by label name (case-insensitive substring match). E.g. 'production', 'edge', 'core'."
                },
                "active_only": {
                    "type": "boolean",
                    "description": "Only return active devices (status=V). Default: true"
                }
            }
        }
    })
}

/// Schema definition for the single-device lookup tool.
pub fn get_device_tool() -> Value {
    json!({
        "name": "kentik_get_device",
        "description": "Get detailed information about a specific Kentik device by its ID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "device_id": {
                    "type": "string",
                    "description": "The ID of the device to retrieve"
                }
            },
            "required": ["device_id"]
        }
    })
}
