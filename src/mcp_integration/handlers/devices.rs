//! Device tool handlers.

use crate::contexts::ContextStore;
use crate::gateway::{ApiGateway, Method};
use crate::mcp_integration::core::{KentikMcpServer, ToolResult};
use crate::mcp_integration::handlers::{format_json, optional_str, require_str, truncate};
use serde::Deserialize;
use serde_json::Value;
use std::fmt::Write as _;

/// Handle the full device listing.
pub async fn handle_list_devices<G, S>(
    server: &KentikMcpServer<G, S>,
    _arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    match server.gateway.v5(Method::GET, "/devices", None).await {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to list devices: {err}")),
    }
}

/// Handle a single-device lookup.
pub async fn handle_get_device<G, S>(server: &KentikMcpServer<G, S>, arguments: Value) -> ToolResult
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
        .v5(Method::GET, &format!("/device/{device_id}"), None)
        .await
    {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to get device: {err}")),
    }
}

#[derive(Debug, Deserialize)]
struct DeviceInventory {
    #[serde(default)]
    devices: Vec<DeviceSummary>,
}

#[derive(Debug, Default, Deserialize)]
struct DeviceSummary {
    #[serde(default)]
    id: String,
    #[serde(default)]
    device_name: String,
    #[serde(default)]
    device_type: String,
    #[serde(default)]
    device_subtype: String,
    #[serde(default)]
    device_status: String,
    #[serde(default)]
    device_snmp_ip: String,
    #[serde(default)]
    site: SiteRef,
    #[serde(default)]
    labels: Vec<LabelRef>,
}

#[derive(Debug, Default, Deserialize)]
struct SiteRef {
    #[serde(default)]
    site_name: String,
}

#[derive(Debug, Default, Deserialize)]
struct LabelRef {
    #[serde(default)]
    name: String,
}

/// Active devices carry status `V` in the v5 inventory.
const ACTIVE_STATUS: &str = "V";

/// Handle the filtered device search: fetches the inventory once, filters
/// client-side, and renders an aligned summary table.
pub async fn handle_search_devices<G, S>(
    server: &KentikMcpServer<G, S>,
    arguments: Value,
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

    let name_filter = optional_str(&arguments, "name_filter").map(str::to_lowercase);
    let site_filter = optional_str(&arguments, "site_filter").map(str::to_lowercase);
    let type_filter = optional_str(&arguments, "type_filter").map(str::to_lowercase);
    let label_filter = optional_str(&arguments, "label_filter").map(str::to_lowercase);
    let active_only = arguments
        .get("active_only")
        .and_then(Value::as_bool)
        .unwrap_or(true);

    let mut table = String::new();
    let _ = writeln!(
        table,
        "{:<8} {:<55} {:<15} {:<12} {:<8} {:<18} {}",
        "ID", "Name", "Site", "Type", "Status", "SNMP IP", "Labels"
    );
    table.push_str(&"-".repeat(140));
    table.push('\n');

    let mut matched = 0usize;
    let mut device_names = Vec::new();

    for device in &inventory.devices {
        if active_only && device.device_status != ACTIVE_STATUS {
            continue;
        }
        if let Some(filter) = &name_filter {
            if !device.device_name.to_lowercase().contains(filter) {
                continue;
            }
        }
        if let Some(filter) = &site_filter {
            if !device.site.site_name.to_lowercase().contains(filter) {
                continue;
            }
        }
        let device_type = if device.device_subtype.is_empty() {
            &device.device_type
        } else {
            &device.device_subtype
        };
        if let Some(filter) = &type_filter {
            if !device_type.to_lowercase().contains(filter) {
                continue;
            }
        }
        if let Some(filter) = &label_filter {
            let has_label = device
                .labels
                .iter()
                .any(|l| l.name.to_lowercase().contains(filter));
            if !has_label {
                continue;
            }
        }

        let status = if device.device_status == ACTIVE_STATUS {
            "Active"
        } else {
            device.device_status.as_str()
        };
        let labels = device
            .labels
            .iter()
            .map(|l| l.name.as_str())
            .collect::<Vec<_>>()
            .join(",");
        let labels = if labels.chars().count() > 30 {
            format!("{}...", truncate(&labels, 27))
        } else {
            labels
        };

        let _ = writeln!(
            table,
            "{:<8} {:<55} {:<15} {:<12} {:<8} {:<18} {}",
            device.id,
            truncate(&device.device_name, 54),
            device.site.site_name,
            device_type,
            status,
            device.device_snmp_ip,
            labels
        );
        matched += 1;
        device_names.push(device.device_name.clone());
    }

    let _ = write!(table, "\nMatched: {matched} devices\n");
    if matched > 0 && matched <= 50 {
        let _ = write!(
            table,
            "\nDevice names for query:\n{}\n",
            device_names.join(",")
        );
    }

    ToolResult::text(table)
}
