//! Error types for the Kentik MCP server.
//!
//! Each layer keeps its own taxonomy: gateway/transport failures, startup
//! configuration problems, and stdio serving failures. Tool handlers never
//! propagate these to the MCP client as protocol errors; they fold them into
//! per-tool error results instead.

/// Errors produced by the API gateway layer.
///
/// The two upstream failure modes (network-level trouble and non-2xx HTTP
/// responses) are kept distinct for diagnostics, but callers treat both
/// uniformly as "the fetch failed with this message". The display text always
/// carries the upstream status and body verbatim.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Network-level failure: connect, TLS, timeout, or body read errors.
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("API error {status}: {body}")]
    Api { status: u16, body: String },

    /// The response body was not the JSON we expected.
    #[error("invalid response payload: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result alias for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors reading server configuration from the environment.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A required environment variable is unset or empty.
    #[error("environment variable {name} is required")]
    MissingVar { name: &'static str },
}

/// Errors from the stdio JSON-RPC serving loop.
///
/// Malformed requests are answered in-band per JSON-RPC and never surface
/// here; this covers only transport-level breakage of stdin/stdout.
#[derive(Debug, thiserror::Error)]
pub enum ServeError {
    /// Reading stdin or writing stdout failed.
    #[error("stdio transport error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_error_carries_status_and_body() {
        let err = GatewayError::Api {
            status: 429,
            body: "rate limit exceeded".to_string(),
        };
        assert_eq!(err.to_string(), "API error 429: rate limit exceeded");
    }

    #[test]
    fn config_error_names_the_variable() {
        let err = ConfigError::MissingVar {
            name: "KENTIK_EMAIL",
        };
        assert!(err.to_string().contains("KENTIK_EMAIL"));
    }
}
