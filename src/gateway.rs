//! API gateway abstraction.
//!
//! Everything above the HTTP client consumes Kentik through this trait: a
//! narrow "call (method, path, body), get a raw JSON payload or a typed
//! failure" contract. Tool handlers and the two engine components
//! ([`crate::bulk`], [`crate::advisor`]) are written against it, which keeps
//! them testable with scripted gateways and indifferent to how requests are
//! actually carried.
//!
//! Kentik exposes two API surfaces with different base URLs: the v5 REST API
//! (devices, interfaces, sites, labels, tags, users, alerting) and the v6
//! gRPC-gateway API (synthetics, AI advisor). The trait mirrors that split
//! rather than hiding it, since paths are only meaningful against the right
//! base.

use crate::error::GatewayError;
use serde_json::Value;
use std::future::Future;

pub use reqwest::Method;

/// Narrow request/response contract against the Kentik APIs.
///
/// Implementations must be safe to call concurrently; the bulk fetch engine
/// issues several calls in flight at once against a shared instance.
///
/// Both methods fail with [`GatewayError::Transport`] for network-level
/// trouble or [`GatewayError::Api`] for non-2xx responses. Callers that only
/// report errors textually can treat the two uniformly via `Display`.
pub trait ApiGateway: Send + Sync {
    /// Call the v5 REST API. `path` starts with `/`, e.g. `/devices`.
    fn v5(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send;

    /// Call the v6 gRPC-gateway API. `path` is the full path, e.g.
    /// `/synthetics/v202309/tests`.
    fn v6(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> impl Future<Output = Result<Value, GatewayError>> + Send;
}
