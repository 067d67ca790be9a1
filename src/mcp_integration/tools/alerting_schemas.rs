//! Alerting tool schemas.

use serde_json::{Value, json};

/// Schema definition for the active alert listing tool.
pub fn list_alerts_tool() -> Value {
    json!({
        "name": "kentik_list_alerts",
        "description": "List active alerts and alarms from Kentik. Shows current anomalies, threshold violations, and DDoS detections across your network.",
        "inputSchema": {
            "type": "object",
            "properties": {
                "status": {
                    "type": "string",
                    "description": "Filter by alert status: 'alarm' (active), 'ackReq' (needs acknowledgement), or leave empty for all."
                },
                "lookback_minutes": {
                    "type": "number",
                    "description": "How far back to look for alerts. Default: 60 (last hour)"
                }
            }
        }
    })
}
