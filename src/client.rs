//! HTTP client for the Kentik API.
//!
//! [`KentikClient`] is the production [`ApiGateway`]: a thin wrapper over a
//! shared, connection-pooled `reqwest::Client` that attaches the Kentik auth
//! headers to every request and normalizes failures into [`GatewayError`].

use crate::config::KentikConfig;
use crate::error::GatewayError;
use crate::gateway::{ApiGateway, Method};
use log::debug;
use serde_json::Value;
use std::time::Duration;

/// Requests against Kentik can run long (large device inventories), so the
/// client-wide timeout is generous.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(120);

/// Credential-bearing HTTP client for the Kentik v5 and v6 APIs.
pub struct KentikClient {
    http: reqwest::Client,
    email: String,
    api_token: String,
    v5_base: String,
    v6_base: String,
}

impl KentikClient {
    /// Create a client for the configured region.
    ///
    /// # Errors
    ///
    /// Returns [`GatewayError::Transport`] if the underlying HTTP client
    /// cannot be constructed (TLS backend initialization).
    pub fn new(config: &KentikConfig) -> Result<Self, GatewayError> {
        Self::with_bases(
            &config.email,
            &config.api_token,
            config.region.v5_base(),
            config.region.v6_base(),
        )
    }

    /// Create a client with explicit base URLs. Used by tests to point at a
    /// local mock server; embedders can use it for proxied deployments.
    pub fn with_bases(
        email: &str,
        api_token: &str,
        v5_base: &str,
        v6_base: &str,
    ) -> Result<Self, GatewayError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            http,
            email: email.to_string(),
            api_token: api_token.to_string(),
            v5_base: v5_base.trim_end_matches('/').to_string(),
            v6_base: v6_base.trim_end_matches('/').to_string(),
        })
    }

    async fn request(
        &self,
        method: Method,
        url: String,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        debug!("{} {}", method, url);

        let mut request = self
            .http
            .request(method, url)
            .header("X-CH-Auth-Email", &self.email)
            .header("X-CH-Auth-API-Token", &self.api_token)
            .header("Content-Type", "application/json");

        if let Some(body) = &body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            return Err(GatewayError::Api {
                status: status.as_u16(),
                body: text,
            });
        }

        if text.is_empty() {
            // A few endpoints answer 2xx with no body.
            return Ok(Value::Null);
        }

        Ok(serde_json::from_str(&text)?)
    }
}

impl ApiGateway for KentikClient {
    async fn v5(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        self.request(method, format!("{}{}", self.v5_base, path), body)
            .await
    }

    async fn v6(
        &self,
        method: Method,
        path: &str,
        body: Option<Value>,
    ) -> Result<Value, GatewayError> {
        self.request(method, format!("{}{}", self.v6_base, path), body)
            .await
    }
}
