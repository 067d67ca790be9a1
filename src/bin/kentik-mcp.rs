//! Kentik MCP server binary.
//!
//! Reads credentials from the environment, then serves MCP tools over
//! stdin/stdout until the client closes the pipe. All diagnostics go to
//! stderr (via `env_logger`); stdout belongs to the protocol.
//!
//! ```bash
//! export KENTIK_EMAIL=user@example.com
//! export KENTIK_API_TOKEN=your_api_token
//! export KENTIK_REGION=US  # optional, US or EU
//! kentik-mcp
//! ```

use kentik_mcp_server::contexts::FileContextStore;
use kentik_mcp_server::{KentikClient, KentikConfig, KentikMcpServer};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match KentikConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            eprintln!();
            eprintln!("Usage:");
            eprintln!("  export KENTIK_EMAIL=user@example.com");
            eprintln!("  export KENTIK_API_TOKEN=your_api_token");
            eprintln!("  export KENTIK_REGION=US  # optional, US or EU");
            eprintln!("  kentik-mcp");
            return ExitCode::FAILURE;
        }
    };

    let client = match KentikClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Error: failed to build HTTP client: {err}");
            return ExitCode::FAILURE;
        }
    };

    let Some(contexts) = FileContextStore::in_home_dir() else {
        eprintln!("Error: could not determine a home directory for the context store");
        return ExitCode::FAILURE;
    };

    let server = KentikMcpServer::new(client, contexts);
    if let Err(err) = server.run_stdio().await {
        eprintln!("Server error: {err}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
