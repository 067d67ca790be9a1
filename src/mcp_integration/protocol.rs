//! MCP protocol layer: tool discovery, dispatch, and stdio serving.
//!
//! The server speaks JSON-RPC 2.0 over line-delimited stdin/stdout, the
//! standard MCP stdio transport. Tool executions never become protocol
//! errors: a failed Kentik call is a `tools/call` result with `isError`
//! set, which agents are expected to read and react to. Protocol errors are
//! reserved for malformed JSON and unknown methods.

use super::core::{KentikMcpServer, ToolResult};
use super::handlers::{
    advisor, alerting, contexts, devices, interfaces, org, synthetics, system_info,
};
use super::tools::{
    advisor_schemas, alerting_schemas, context_schemas, device_schemas, interface_schemas,
    org_schemas, synthetics_schemas, system_schemas,
};
use crate::contexts::ContextStore;
use crate::error::ServeError;
use crate::gateway::ApiGateway;
use log::{debug, info};
use serde_json::{Value, json};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};

const PROTOCOL_VERSION: &str = "2024-11-05";

const PARSE_ERROR: i64 = -32700;
const METHOD_NOT_FOUND: i64 = -32601;

impl<G, S> KentikMcpServer<G, S>
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    /// Get the list of available MCP tools as JSON definitions.
    pub fn get_tools(&self) -> Vec<Value> {
        vec![
            device_schemas::list_devices_tool(),
            device_schemas::search_devices_tool(),
            device_schemas::get_device_tool(),
            interface_schemas::list_interfaces_tool(),
            interface_schemas::list_all_interfaces_tool(),
            interface_schemas::get_interface_tool(),
            org_schemas::list_sites_tool(),
            org_schemas::get_site_tool(),
            org_schemas::list_labels_tool(),
            org_schemas::get_label_tool(),
            org_schemas::list_tags_tool(),
            org_schemas::get_tag_tool(),
            org_schemas::list_users_tool(),
            org_schemas::get_user_tool(),
            synthetics_schemas::list_synthetic_tests_tool(),
            synthetics_schemas::get_synthetic_test_tool(),
            synthetics_schemas::get_synthetic_results_tool(),
            synthetics_schemas::list_synthetic_agents_tool(),
            synthetics_schemas::get_synthetic_agent_tool(),
            synthetics_schemas::get_synthetic_trace_tool(),
            alerting_schemas::list_alerts_tool(),
            advisor_schemas::ai_advisor_tool(),
            context_schemas::save_context_tool(),
            context_schemas::list_contexts_tool(),
            context_schemas::delete_context_tool(),
            system_schemas::server_info_tool(),
        ]
    }

    /// Execute a tool by name with JSON arguments.
    ///
    /// Unknown tool names produce an error result, not a panic or protocol
    /// error, so a confused agent gets something it can correct from.
    pub async fn execute_tool(&self, tool_name: &str, arguments: Value) -> ToolResult {
        debug!("executing tool {tool_name}");

        match tool_name {
            "kentik_list_devices" => devices::handle_list_devices(self, arguments).await,
            "kentik_search_devices" => devices::handle_search_devices(self, arguments).await,
            "kentik_get_device" => devices::handle_get_device(self, arguments).await,

            "kentik_list_interfaces" => interfaces::handle_list_interfaces(self, arguments).await,
            "kentik_list_all_interfaces" => {
                interfaces::handle_list_all_interfaces(self, arguments).await
            }
            "kentik_get_interface" => interfaces::handle_get_interface(self, arguments).await,

            "kentik_list_sites" => org::handle_list_sites(self, arguments).await,
            "kentik_get_site" => org::handle_get_site(self, arguments).await,
            "kentik_list_labels" => org::handle_list_labels(self, arguments).await,
            "kentik_get_label" => org::handle_get_label(self, arguments).await,
            "kentik_list_tags" => org::handle_list_tags(self, arguments).await,
            "kentik_get_tag" => org::handle_get_tag(self, arguments).await,
            "kentik_list_users" => org::handle_list_users(self, arguments).await,
            "kentik_get_user" => org::handle_get_user(self, arguments).await,

            "kentik_list_synthetic_tests" => {
                synthetics::handle_list_synthetic_tests(self, arguments).await
            }
            "kentik_get_synthetic_test" => {
                synthetics::handle_get_synthetic_test(self, arguments).await
            }
            "kentik_get_synthetic_results" => {
                synthetics::handle_get_synthetic_results(self, arguments).await
            }
            "kentik_list_synthetic_agents" => {
                synthetics::handle_list_synthetic_agents(self, arguments).await
            }
            "kentik_get_synthetic_agent" => {
                synthetics::handle_get_synthetic_agent(self, arguments).await
            }
            "kentik_get_synthetic_trace" => {
                synthetics::handle_get_synthetic_trace(self, arguments).await
            }

            "kentik_list_alerts" => alerting::handle_list_alerts(self, arguments).await,

            "kentik_ai_advisor" => advisor::handle_ask_advisor(self, arguments).await,

            "kentik_save_context" => contexts::handle_save_context(self, arguments).await,
            "kentik_list_contexts" => contexts::handle_list_contexts(self, arguments).await,
            "kentik_delete_context" => contexts::handle_delete_context(self, arguments).await,

            "kentik_server_info" => system_info::handle_server_info(self, arguments).await,

            _ => ToolResult::error(format!("Unknown tool: {tool_name}")),
        }
    }

    /// Serve MCP over stdin/stdout until EOF.
    ///
    /// # Errors
    ///
    /// Returns [`ServeError`] only for transport-level stdio failures;
    /// malformed requests are answered in-band.
    pub async fn run_stdio(self) -> Result<(), ServeError> {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        let mut stdout = tokio::io::stdout();

        info!(
            "{} v{} serving {} tools on stdio",
            self.server_info.name,
            self.server_info.version,
            self.get_tools().len()
        );

        while let Some(line) = lines.next_line().await? {
            let line = line.trim();
            if line.is_empty() {
                continue;
            }

            if let Some(response) = self.handle_message(line).await {
                let mut payload = response.to_string();
                payload.push('\n');
                stdout.write_all(payload.as_bytes()).await?;
                stdout.flush().await?;
            }
        }

        info!("stdin closed, shutting down");
        Ok(())
    }

    /// Handle one JSON-RPC message; `None` means no response is owed
    /// (notifications).
    pub(crate) async fn handle_message(&self, line: &str) -> Option<Value> {
        let message: Value = match serde_json::from_str(line) {
            Ok(message) => message,
            Err(err) => {
                return Some(error_response(
                    Value::Null,
                    PARSE_ERROR,
                    &format!("invalid JSON: {err}"),
                ));
            }
        };

        let method = message
            .get("method")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        // Requests without an id are notifications and get no response.
        let Some(id) = message.get("id").cloned().filter(|id| !id.is_null()) else {
            debug!("notification: {method}");
            return None;
        };

        let result = match method.as_str() {
            "initialize" => self.initialize_result(),
            "ping" => json!({}),
            "tools/list" => json!({"tools": self.get_tools()}),
            "tools/call" => {
                let params = message.get("params").cloned().unwrap_or_else(|| json!({}));
                let name = params
                    .get("name")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string();
                let arguments = params
                    .get("arguments")
                    .cloned()
                    .unwrap_or_else(|| json!({}));

                let outcome = self.execute_tool(&name, arguments).await;
                json!({
                    "content": [{"type": "text", "text": outcome.content}],
                    "isError": !outcome.success,
                })
            }
            _ => {
                return Some(error_response(
                    id,
                    METHOD_NOT_FOUND,
                    &format!("method not found: {method}"),
                ));
            }
        };

        Some(json!({"jsonrpc": "2.0", "id": id, "result": result}))
    }

    fn initialize_result(&self) -> Value {
        json!({
            "protocolVersion": PROTOCOL_VERSION,
            "capabilities": {"tools": {}},
            "serverInfo": {
                "name": self.server_info.name,
                "version": self.server_info.version,
            },
            "instructions": self.server_info.instructions,
        })
    }
}

fn error_response(id: Value, code: i64, message: &str) -> Value {
    json!({
        "jsonrpc": "2.0",
        "id": id,
        "error": {"code": code, "message": message},
    })
}
