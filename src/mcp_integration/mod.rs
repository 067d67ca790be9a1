//! MCP (Model Context Protocol) integration.
//!
//! This module exposes Kentik operations as structured tools for AI agents:
//! tool schemas for discovery, handlers for execution, and a JSON-RPC stdio
//! loop for serving.
//!
//! ## Module Structure
//!
//! - `core` - foundational types (`McpServerInfo`, `ToolResult`,
//!   `KentikMcpServer`)
//! - `protocol` - tool discovery, dispatch, and the stdio serving loop
//! - `tools/` - JSON schema definitions for tool discovery, one module per
//!   resource family
//! - `handlers/` - tool execution handlers, mirroring `tools/`
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use kentik_mcp_server::config::KentikConfig;
//! use kentik_mcp_server::client::KentikClient;
//! use kentik_mcp_server::contexts::FileContextStore;
//! use kentik_mcp_server::mcp_integration::KentikMcpServer;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = KentikConfig::from_env()?;
//! let client = KentikClient::new(&config)?;
//! let contexts = FileContextStore::in_home_dir().expect("home directory");
//!
//! let server = KentikMcpServer::new(client, contexts);
//! server.run_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod handlers;
pub mod protocol;
pub mod tools;


// Re-export core types for convenience
pub use core::{KentikMcpServer, McpServerInfo, ToolResult};
