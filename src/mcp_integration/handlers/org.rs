//! Handlers for organizational resources: sites, device labels, flow tags,
//! and users. All are direct v5 pass-throughs.

use crate::contexts::ContextStore;
use crate::gateway::{ApiGateway, Method};
use crate::mcp_integration::core::{KentikMcpServer, ToolResult};
use crate::mcp_integration::handlers::{format_json, require_str};
use serde_json::Value;

async fn passthrough<G, S>(
    server: &KentikMcpServer<G, S>,
    path: &str,
    failure: &str,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    match server.gateway.v5(Method::GET, path, None).await {
        Ok(data) => ToolResult::text(format_json(&data)),
        Err(err) => ToolResult::error(format!("{failure}: {err}")),
    }
}

/// Handle the site listing.
pub async fn handle_list_sites<G, S>(server: &KentikMcpServer<G, S>, _arguments: Value) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    passthrough(server, "/sites", "Failed to list sites").await
}

/// Handle a site lookup.
pub async fn handle_get_site<G, S>(server: &KentikMcpServer<G, S>, arguments: Value) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let site_id = match require_str(&arguments, "site_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    passthrough(server, &format!("/site/{site_id}"), "Failed to get site").await
}

/// Handle the device label listing.
pub async fn handle_list_labels<G, S>(
    server: &KentikMcpServer<G, S>,
    _arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    passthrough(server, "/deviceLabels", "Failed to list labels").await
}

/// Handle a device label lookup.
pub async fn handle_get_label<G, S>(server: &KentikMcpServer<G, S>, arguments: Value) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let label_id = match require_str(&arguments, "label_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    passthrough(
        server,
        &format!("/deviceLabels/{label_id}"),
        "Failed to get label",
    )
    .await
}

/// Handle the flow tag listing.
pub async fn handle_list_tags<G, S>(server: &KentikMcpServer<G, S>, _arguments: Value) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    passthrough(server, "/tags", "Failed to list tags").await
}

/// Handle a flow tag lookup.
pub async fn handle_get_tag<G, S>(server: &KentikMcpServer<G, S>, arguments: Value) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let tag_id = match require_str(&arguments, "tag_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    passthrough(server, &format!("/tag/{tag_id}"), "Failed to get tag").await
}

/// Handle the user listing.
pub async fn handle_list_users<G, S>(server: &KentikMcpServer<G, S>, _arguments: Value) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    passthrough(server, "/users", "Failed to list users").await
}

/// Handle a user lookup.
pub async fn handle_get_user<G, S>(server: &KentikMcpServer<G, S>, arguments: Value) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let user_id = match require_str(&arguments, "user_id") {
        Ok(id) => id,
        Err(result) => return result,
    };
    passthrough(server, &format!("/user/{user_id}"), "Failed to get user").await
}
