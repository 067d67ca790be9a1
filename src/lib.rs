//! Kentik MCP server library.
//!
//! Exposes the Kentik network observability platform (v5 REST API and v6
//! gateway API) as Model Context Protocol tools for AI agents: device,
//! interface, site, label, tag, and user inventory, synthetic monitoring,
//! active alerts, the asynchronous AI Advisor, and reusable saved query
//! contexts.
//!
//! # Core Components
//!
//! - [`KentikMcpServer`] - MCP server wrapper: tool discovery, dispatch, and
//!   the stdio serving loop
//! - [`ApiGateway`] - trait for carrying requests to Kentik, implemented by
//!   [`KentikClient`]
//! - [`bulk`] - bounded-concurrency bulk fetch with per-item error isolation
//! - [`advisor`] - submit-then-poll client for AI Advisor sessions
//! - [`ContextStore`] - trait for persisting saved query contexts
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use kentik_mcp_server::{KentikClient, KentikConfig, KentikMcpServer};
//! use kentik_mcp_server::contexts::FileContextStore;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = KentikConfig::from_env()?;
//! let client = KentikClient::new(&config)?;
//! let contexts = FileContextStore::in_home_dir().expect("home directory");
//!
//! KentikMcpServer::new(client, contexts).run_stdio().await?;
//! # Ok(())
//! # }
//! ```

pub mod advisor;
pub mod bulk;
pub mod client;
pub mod config;
pub mod contexts;
pub mod error;
pub mod gateway;
pub mod mcp_integration;

// Re-export commonly used types for convenience
pub use advisor::{AdvisorOutcome, AdvisorPoller};
pub use bulk::{FetchResult, WorkItem, fetch_all};
pub use client::KentikClient;
pub use config::{KentikConfig, Region};
pub use contexts::{ContextStore, FileContextStore, InMemoryContextStore, QueryContext};
pub use error::{ConfigError, GatewayError, GatewayResult, ServeError};
pub use gateway::{ApiGateway, Method};
pub use mcp_integration::{KentikMcpServer, McpServerInfo, ToolResult};
