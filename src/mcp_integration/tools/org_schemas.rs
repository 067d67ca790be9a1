//! Tool schemas for organizational resources: sites, device labels, flow
//! tags, and users. All are simple list/get pairs over the v5 REST API.

use serde_json::{Value, json};

/// Schema definition for the site listing tool.
pub fn list_sites_tool() -> Value {
    json!({
        "name": "kentik_list_sites",
        "description": "List all sites in Kentik. Sites are groups of devices based on geographic location.",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the site lookup tool.
pub fn get_site_tool() -> Value {
    json!({
        "name": "kentik_get_site",
        "description": "Get detailed information about a specific site by ID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "site_id": {
                    "type": "string",
                    "description": "The ID of the site"
                }
            },
            "required": ["site_id"]
        }
    })
}

/// Schema definition for the device label listing tool.
pub fn list_labels_tool() -> Value {
    json!({
        "name": "kentik_list_labels",
        "description": "List all device labels (tags used to group devices) in Kentik.",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the device label lookup tool.
pub fn get_label_tool() -> Value {
    json!({
        "name": "kentik_get_label",
        "description": "Get information about a specific device label by ID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "label_id": {
                    "type": "string",
                    "description": "The ID of the label"
                }
            },
            "required": ["label_id"]
        }
    })
}

/// Schema definition for the flow tag listing tool.
pub fn list_tags_tool() -> Value {
    json!({
        "name": "kentik_list_tags",
        "description": "List all flow tags in Kentik. Flow tags are used to classify and label network traffic.",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the flow tag lookup tool.
pub fn get_tag_tool() -> Value {
    json!({
        "name": "kentik_get_tag",
        "description": "Get information about a specific flow tag by ID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "tag_id": {
                    "type": "string",
                    "description": "The ID of the tag"
                }
            },
            "required": ["tag_id"]
        }
    })
}

/// Schema definition for the user listing tool.
pub fn list_users_tool() -> Value {
    json!({
        "name": "kentik_list_users",
        "description": "List all users registered in the Kentik organization.",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the user lookup tool.
pub fn get_user_tool() -> Value {
    json!({
        "name": "kentik_get_user",
        "description": "Get information about a specific user by ID.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "user_id": {
                    "type": "string",
                    "description": "The ID of the user"
                }
            },
            "required": ["user_id"]
        }
    })
}
