//! Core MCP integration infrastructure.
//!
//! Foundational types for the MCP layer: server metadata for agent
//! discovery, the tool execution result, and the server wrapper the protocol
//! and handler modules hang off.

use crate::advisor::AdvisorPoller;
use crate::contexts::ContextStore;
use crate::gateway::ApiGateway;
use std::sync::Arc;
use std::time::Duration;

/// Metadata AI agents see during the MCP handshake.
#[derive(Debug, Clone)]
pub struct McpServerInfo {
    /// Human-readable server name.
    pub name: String,
    /// Server version string.
    pub version: String,
    /// Usage instructions returned from `initialize`.
    pub instructions: String,
}

impl Default for McpServerInfo {
    fn default() -> Self {
        Self {
            name: "Kentik MCP Server".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            instructions: "Kentik MCP Server provides access to the Kentik network \
                observability platform. Available capabilities: list and inspect devices, \
                interfaces, sites, labels, tags, and users, run and inspect synthetic \
                monitoring tests, agents, and results, review active alerts and alarms, \
                ask Kentik's AI Advisor natural language questions about your network, \
                and save reusable query contexts. \
                API docs: https://kb.kentik.com/docs/apis-overview"
                .to_string(),
        }
    }
}

/// Outcome of one tool execution, as sent back to the MCP client.
///
/// Tool failures are data, not protocol errors: a failed Kentik call becomes
/// a `success: false` result whose content explains what went wrong, so the
/// agent can react to it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolResult {
    /// Whether the tool executed successfully.
    pub success: bool,
    /// Text content shown to the agent.
    pub content: String,
}

impl ToolResult {
    /// Successful result with text content.
    pub fn text(content: impl Into<String>) -> Self {
        Self {
            success: true,
            content: content.into(),
        }
    }

    /// Failed result with an error message.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            success: false,
            content: message.into(),
        }
    }
}

/// MCP server wrapper for Kentik operations.
///
/// Wraps the API gateway and the context store and exposes them as MCP tools
/// agents can discover and execute. The two type parameters are the seams
/// everything is tested through: `G` carries Kentik traffic, `S` persists
/// saved query contexts.
pub struct KentikMcpServer<G: ApiGateway, S: ContextStore> {
    pub(crate) gateway: Arc<G>,
    pub(crate) contexts: Arc<S>,
    pub(crate) advisor: AdvisorPoller<G>,
    pub(crate) server_info: McpServerInfo,
}

impl<G, S> KentikMcpServer<G, S>
where
    G: ApiGateway + 'static,
    S: ContextStore + 'static,
{
    /// Create a server with default metadata and advisor cadence.
    pub fn new(gateway: G, contexts: S) -> Self {
        Self::with_info(gateway, contexts, McpServerInfo::default())
    }

    /// Create a server with custom metadata.
    pub fn with_info(gateway: G, contexts: S, server_info: McpServerInfo) -> Self {
        let gateway = Arc::new(gateway);
        Self {
            advisor: AdvisorPoller::new(Arc::clone(&gateway)),
            gateway,
            contexts: Arc::new(contexts),
            server_info,
        }
    }

    /// Override the advisor polling cadence (mainly for tests and embedders
    /// with stricter budgets).
    pub fn with_advisor_timing(mut self, interval: Duration, deadline: Duration) -> Self {
        self.advisor = AdvisorPoller::with_timing(Arc::clone(&self.gateway), interval, deadline);
        self
    }

    /// Server metadata used in the MCP handshake.
    pub fn server_info(&self) -> &McpServerInfo {
        &self.server_info
    }
}
