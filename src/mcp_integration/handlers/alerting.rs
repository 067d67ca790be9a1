//! Alerting handlers.
//!
//! The active-alarm payload is summarized into a markdown table when it
//! parses; on any shape we do not recognize, the raw payload is returned
//! verbatim instead of failing. Upstream schema drift must not crash the
//! display.

use crate::contexts::ContextStore;
use crate::gateway::{ApiGateway, Method};
use crate::mcp_integration::core::{KentikMcpServer, ToolResult};
use crate::mcp_integration::handlers::{format_json, optional_str, truncate};
use serde_json::Value;
use std::fmt::Write as _;

/// Handle the active alert listing.
pub async fn handle_list_alerts<G, S>(server: &KentikMcpServer<G, S>, arguments: Value) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let lookback_minutes = arguments
        .get("lookback_minutes")
        .and_then(Value::as_f64)
        .unwrap_or(60.0) as i64;

    let path = format!("/alerts-active/alarms?lookback_minutes={lookback_minutes}");
    let data = match server.gateway.v5(Method::GET, &path, None).await {
        Ok(data) => data,
        Err(err) => return ToolResult::error(format!("Failed to list alerts: {err}")),
    };

    // The endpoint has answered both as a bare array and as {"alarms": [..]}.
    let mut alarms: Vec<Value> = match &data {
        Value::Array(items) => items.clone(),
        Value::Object(map) => match map.get("alarms").and_then(Value::as_array) {
            Some(items) => items.clone(),
            None => return ToolResult::text(format_json(&data)),
        },
        _ => return ToolResult::text(format_json(&data)),
    };

    if let Some(status) = optional_str(&arguments, "status").map(str::to_lowercase) {
        alarms.retain(|a| field(a, "alarm_state").to_lowercase().contains(&status));
    }

    if alarms.is_empty() {
        return ToolResult::text("No active alerts found.");
    }

    let mut out = String::new();
    let _ = writeln!(out, "## Active Alerts ({})\n", alarms.len());
    let _ = writeln!(
        out,
        "| {:<30} | {:<15} | {:<20} | {:<30} |",
        "Policy", "State", "Severity", "Dimension"
    );
    let _ = writeln!(
        out,
        "|{}|{}|{}|{}|",
        "-".repeat(32),
        "-".repeat(17),
        "-".repeat(22),
        "-".repeat(32)
    );

    for alarm in &alarms {
        let mut policy = field(alarm, "alert_policy_name");
        if policy.is_empty() {
            policy = field(alarm, "alert_id");
        }
        let dimension = field(alarm, "alert_dimension");

        let policy = shorten(&policy, 30);
        let dimension = shorten(&dimension, 30);

        let _ = writeln!(
            out,
            "| {:<30} | {:<15} | {:<20} | {:<30} |",
            policy,
            field(alarm, "alarm_state"),
            field(alarm, "alert_severity"),
            dimension
        );
    }

    let _ = write!(
        out,
        "\n<details><summary>Raw JSON</summary>\n\n```json\n{}\n```\n</details>\n",
        format_json(&data)
    );

    ToolResult::text(out)
}

/// Render an alarm field for display: strings verbatim, other scalars via
/// their JSON form, missing/null as empty.
fn field(alarm: &Value, key: &str) -> String {
    match alarm.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

fn shorten(text: &str, max_chars: usize) -> String {
    if text.chars().count() > max_chars {
        format!("{}...", truncate(text, max_chars - 3))
    } else {
        text.to_string()
    }
}
