//! Interface tool handlers.
//!
//! `kentik_list_all_interfaces` is the one tool with real machinery behind
//! it: it resolves the device inventory, then drives the bulk fetch engine
//! ([`crate::bulk`]) to pull per-device interface lists under a concurrency
//! cap, reporting per-device failures inline instead of aborting the sweep.

use crate::bulk::{self, FetchResult, WorkItem};
use crate::contexts::ContextStore;
use crate::gateway::{ApiGateway, Method};
use crate::mcp_integration::core::{KentikMcpServer, ToolResult};
use crate::mcp_integration::handlers::{format_json, require_str};
use serde::Deserialize;
use serde_json::{Value, json};
use std::sync::Arc;
use std::time::Duration;

/// Cap on simultaneous interface fetches across the device sweep.
const MAX_CONCURRENT_FETCHES: usize = 4;
/// Fixed delay before each fetch, keeping the sweep under Kentik's rate
/// limits.
const INTER_REQUEST_DELAY: Duration = Duration::from_millis(100);

const ACTIVE_STATUS: &str = "V";

/// Handle the per-device interface listing.
pub async fn handle_list_interfaces<G, S>(
    server: &KentikMcpServer<G, S>,
    arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let device_id = match require_str(&arguments, "device_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    match server
        .gateway
        .v5(Method::GET, &format!("/device/{device_id}/interfaces"), None)
        .await
    {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to list interfaces: {err}")),
    }
}

/// Handle a single-interface lookup.
pub async fn handle_get_interface<G, S>(
    server: &KentikMcpServer<G, S>,
    arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let device_id = match require_str(&arguments, "device_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    let interface_id = match require_str(&arguments, "interface_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    match server
        .gateway
        .v5(
            Method::GET,
            &format!("/device/{device_id}/interface/{interface_id}"),
            None,
        )
        .await
    {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to get interface: {err}")),
    }
}

#[derive(Debug, Deserialize)]
struct DeviceInventory {
    #[serde(default)]
    devices: Vec<DeviceEntry>,
}

#[derive(Debug, Deserialize)]
struct DeviceEntry {
    #[serde(default)]
    id: String,
    #[serde(default)]
    device_name: String,
    #[serde(default)]
    device_status: String,
}

/// Handle the fleet-wide interface sweep.
pub async fn handle_list_all_interfaces<G, S>(
    server: &KentikMcpServer<G, S>,
    _arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let data = match server.gateway.v5(Method::GET, "/devices", None).await {
        Ok(data) => data,
        Err(err) => return ToolResult::error(format!("Failed to list devices: {err}")),
    };
    let inventory: DeviceInventory = match serde_json::from_value(data) {
        Ok(inventory) => inventory,
        Err(err) => return ToolResult::error(format!("Failed to parse devices: {err}")),
    };

    let items: Vec<WorkItem> = inventory
        .devices
        .into_iter()
        .filter(|d| d.device_status == ACTIVE_STATUS)
        .map(|d| WorkItem::new(d.id, d.device_name))
        .collect();

    let gateway = Arc::clone(&server.gateway);
    let results = bulk::fetch_all(
        items,
        MAX_CONCURRENT_FETCHES,
        INTER_REQUEST_DELAY,
        move |item: WorkItem| {
            let gateway = Arc::clone(&gateway);
            async move {
                gateway
                    .v5(Method::GET, &format!("/device/{}/interfaces", item.id), None)
                    .await
            }
        },
    )
    .await;

    let failed = results.iter().filter(|r| !r.is_success()).count();
    let rows: Vec<Value> = results.into_iter().map(result_row).collect();

    let mut header = format!("Interfaces for {} active devices", rows.len());
    if failed > 0 {
        header.push_str(&format!(" ({failed} failed)"));
    }
    ToolResult::text(format!("{header}\n\n{}", format_json(&Value::Array(rows))))
}

fn result_row(result: FetchResult) -> Value {
    let FetchResult {
        id,
        label,
        payload,
        error,
    } = result;
    match payload {
        Some(interfaces) => json!({
            "device_id": id,
            "device_name": label,
            "interfaces": interfaces,
        }),
        None => json!({
            "device_id": id,
            "device_name": label,
            "error": error.unwrap_or_else(|| "fetch failed".to_string()),
        }),
    }
}
