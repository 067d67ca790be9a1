//! Saved query context handlers.

use crate::contexts::{ContextStore, QueryContext};
use crate::gateway::ApiGateway;
use crate::mcp_integration::core::{KentikMcpServer, ToolResult};
use crate::mcp_integration::handlers::{optional_str, require_str};
use chrono::Utc;
use serde_json::Value;
use std::fmt::Write as _;

/// Handle a context save: build the context from the provided parameters and
/// store it, replacing any same-named entry.
pub async fn handle_save_context<G, S>(
    server: &KentikMcpServer<G, S>,
    arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let name = match require_str(&arguments, "name") {
        Ok(name) => name,
        Err(result) => return result,
    };

    let context = QueryContext {
        name: name.to_string(),
        description: optional_str(&arguments, "description").map(str::to_string),
        device_names: optional_str(&arguments, "device_names").map(str::to_string),
        site_name: optional_str(&arguments, "site_name").map(str::to_string),
        device_label: optional_str(&arguments, "device_label").map(str::to_string),
        dst_connect_type: optional_str(&arguments, "dst_connect_type").map(str::to_string),
        src_connect_type: optional_str(&arguments, "src_connect_type").map(str::to_string),
        port: optional_str(&arguments, "port").map(str::to_string),
        dst_as: optional_str(&arguments, "dst_as").map(str::to_string),
        src_as: optional_str(&arguments, "src_as").map(str::to_string),
        tags: Vec::new(),
        saved_at: Some(Utc::now()),
    };

    match server.contexts.put(context).await {
        Ok(()) => ToolResult::text(format!("Context '{name}' saved.")),
        Err(err) => ToolResult::error(format!("Failed to save context: {err}")),
    }
}

/// Handle the context listing: renders each saved context as a markdown
/// section.
pub async fn handle_list_contexts<G, S>(
    server: &KentikMcpServer<G, S>,
    _arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let contexts = match server.contexts.list().await {
        Ok(contexts) => contexts,
        Err(err) => return ToolResult::error(format!("Failed to load contexts: {err}")),
    };

    if contexts.is_empty() {
        return ToolResult::text("No saved contexts. Use kentik_save_context to create one.");
    }

    let mut out = String::new();
    let _ = writeln!(out, "## Saved Query Contexts ({})\n", contexts.len());
    for context in &contexts {
        let _ = writeln!(out, "### {}", context.name);
        if let Some(description) = &context.description {
            let _ = writeln!(out, "*{description}*");
        }
        write_param(&mut out, "device_names", &context.device_names);
        write_param(&mut out, "site_name", &context.site_name);
        write_param(&mut out, "device_label", &context.device_label);
        write_param(&mut out, "dst_connect_type", &context.dst_connect_type);
        write_param(&mut out, "src_connect_type", &context.src_connect_type);
        write_param(&mut out, "port", &context.port);
        write_param(&mut out, "dst_as", &context.dst_as);
        write_param(&mut out, "src_as", &context.src_as);
        out.push('\n');
    }

    ToolResult::text(out)
}

fn write_param(out: &mut String, key: &str, value: &Option<String>) {
    if let Some(value) = value {
        let _ = writeln!(out, "- {key}: `{value}`");
    }
}

/// Handle a context deletion.
pub async fn handle_delete_context<G, S>(
    server: &KentikMcpServer<G, S>,
    arguments: Value,
) -> ToolResult
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    let name = match require_str(&arguments, "name") {
        Ok(name) => name,
        Err(result) => return result,
    };

    match server.contexts.delete(name).await {
        Ok(true) => ToolResult::text(format!("Context '{name}' deleted.")),
        Ok(false) => ToolResult::error(format!("Context '{name}' not found.")),
        Err(err) => ToolResult::error(format!("Failed to delete context: {err}")),
    }
}
