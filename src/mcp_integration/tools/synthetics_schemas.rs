//! Synthetic monitoring tool schemas (v6 gateway API).

use serde_json::{Value, json};

/// Schema definition for the synthetic test listing tool.
pub fn list_synthetic_tests_tool() -> Value {
    json!({
        "name": "kentik_list_synthetic_tests",
        "description": "List all configured synthetic tests in Kentik (active and paused). Returns test names, types, status, and configuration.",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the synthetic test lookup tool.
pub fn get_synthetic_test_tool() -> Value {
    json!({
        "name": "kentik_get_synthetic_test",
        "description": "Get detailed configuration and status for a specific synthetic test.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "test_id": {
                    "type": "string",
                    "description": "The ID of the synthetic test"
                }
            },
            "required": ["test_id"]
        }
    })
}

/// Schema definition for the synthetic results tool.
pub fn get_synthetic_results_tool() -> Value {
    json!({
        "name": "kentik_get_synthetic_results",
        "description": "Get probe results for one or more synthetic tests over a given time period. Returns health status, latency, packet loss, and other metrics.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "test_ids": {
                    "type": "string",
                    "description": "Comma-separated list of synthetic test IDs"
                },
                "start_time": {
                    "type": "string",
                    "description": "Start time in RFC3339 format (e.g. 2025-01-01T00:00:00Z)"
                },
                "end_time": {
                    "type": "string",
                    "description": "End time in RFC3339 format (e.g. 2025-01-01T01:00:00Z)"
                }
            },
            "required": ["test_ids", "start_time", "end_time"]
        }
    })
}

/// Schema definition for the synthetic agent listing tool.
pub fn list_synthetic_agents_tool() -> Value {
    json!({
        "name": "kentik_list_synthetic_agents",
        "description": "List all synthetic monitoring agents available in the account (both global/public and private agents).",
        "inputSchema": {
            "type": "object",
            "properties": {}
        }
    })
}

/// Schema definition for the synthetic agent lookup tool.
pub fn get_synthetic_agent_tool() -> Value {
    json!({
        "name": "kentik_get_synthetic_agent",
        "description": "Get detailed information about a specific synthetic monitoring agent.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "agent_id": {
                    "type": "string",
                    "description": "The ID of the synthetic agent"
                }
            },
            "required": ["agent_id"]
        }
    })
}

/// Schema definition for the synthetic trace tool.
pub fn get_synthetic_trace_tool() -> Value {
    json!({
        "name": "kentik_get_synthetic_trace",
        "description": "Get network trace (traceroute) data for a specific synthetic test. The test must have traceroute task configured.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "test_id": {
                    "type": "string",
                    "description": "The ID of the synthetic test"
                },
                "start_time": {
                    "type": "string",
                    "description": "Start time in RFC3339 format"
                },
                "end_time": {
                    "type": "string",
                    "description": "End time in RFC3339 format"
                }
            },
            "required": ["test_id", "start_time", "end_time"]
        }
    })
}
