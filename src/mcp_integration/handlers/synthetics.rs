//! Synthetic monitoring handlers (v6 gateway API).

use crate::contexts::ContextStore;
use crate::gateway::{ApiGateway, Method};
use crate::mcp_integration::core::{KentikMcpServer, ToolResult};
use crate::mcp_integration::handlers::{format_json, require_str};
use serde_json::{Value, json};

const SYNTHETICS_BASE: &str = "/synthetics/v202309";

/// Handle the synthetic test listing.
pub async fn handle_list_synthetic_tests<G, S>(
    server: &KentikMcpServer<G, S>,
    _arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    match server
        .gateway
        .v6(Method::GET, &format!("{SYNTHETICS_BASE}/tests"), None)
        .await
    {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to list synthetic tests: {err}")),
    }
}

/// Handle a synthetic test lookup.
pub async fn handle_get_synthetic_test<G, S>(
    server: &KentikMcpServer<G, S>,
    arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let test_id = match require_str(&arguments, "test_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    match server
        .gateway
        .v6(
            Method::GET,
            &format!("{SYNTHETICS_BASE}/tests/{test_id}"),
            None,
        )
        .await
    {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to get synthetic test: {err}")),
    }
}

/// Handle the synthetic results query.
pub async fn handle_get_synthetic_results<G, S>(
    server: &KentikMcpServer<G, S>,
    arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let test_ids = match require_str(&arguments, "test_ids") {
        Ok(ids) => ids,
        Err(result) => return result,
    };
    let start_time = match require_str(&arguments, "start_time") {
        Ok(t) => t,
        Err(result) => return result,
    };
    let end_time = match require_str(&arguments, "end_time") {
        Ok(t) => t,
        Err(result) => return result,
    };

    let test_ids: Vec<&str> = test_ids
        .split(',')
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .collect();

    let body = json!({
        "testIds": test_ids,
        "startTime": start_time,
        "endTime": end_time,
    });

    match server
        .gateway
        .v6(
            Method::POST,
            &format!("{SYNTHETICS_BASE}/results"),
            Some(body),
        )
        .await
    {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to get synthetic results: {err}")),
    }
}

/// Handle the synthetic agent listing.
pub async fn handle_list_synthetic_agents<G, S>(
    server: &KentikMcpServer<G, S>,
    _arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    match server
        .gateway
        .v6(Method::GET, &format!("{SYNTHETICS_BASE}/agents"), None)
        .await
    {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to list synthetic agents: {err}")),
    }
}

/// Handle a synthetic agent lookup.
pub async fn handle_get_synthetic_agent<G, S>(
    server: &KentikMcpServer<G, S>,
    arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let agent_id = match require_str(&arguments, "agent_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    match server
        .gateway
        .v6(
            Method::GET,
            &format!("{SYNTHETICS_BASE}/agents/{agent_id}"),
            None,
        )
        .await
    {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to get synthetic agent: {err}")),
    }
}

/// Handle the synthetic trace query.
pub async fn handle_get_synthetic_trace<G, S>(
    server: &KentikMcpServer<G, S>,
    arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let test_id = match require_str(&arguments, "test_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    let start_time = match require_str(&arguments, "start_time") {
        Ok(t) => t,
        Err(result) => return result,
    };
    let end_time = match require_str(&arguments, "end_time") {
        Ok(t) => t,
        Err(result) => return result,
    };

    let body = json!({
        "id": test_id,
        "startTime": start_time,
        "endTime": end_time,
    });

    match server
        .gateway
        .v6(Method::POST, &format!("{SYNTHETICS_BASE}/trace"), Some(body))
        .await
    {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("Failed to get synthetic trace: {err}")),
    }
}
