//! Server configuration sourced from the environment.
//!
//! Credentials and region selection follow the conventions of the other
//! Kentik API clients: `KENTIK_EMAIL` and `KENTIK_API_TOKEN` are required,
//! `KENTIK_REGION` is optional and defaults to the US deployment.

use crate::error::ConfigError;

/// Kentik deployment region, selecting the API base URLs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    /// US deployment (`api.kentik.com`). The default.
    #[default]
    Us,
    /// EU deployment (`api.kentik.eu`).
    Eu,
}

impl Region {
    /// Parse the `KENTIK_REGION` value. Anything other than `EU`
    /// (case-insensitive) selects the US deployment.
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("EU") {
            Region::Eu
        } else {
            Region::Us
        }
    }

    /// Base URL of the v5 REST API.
    pub fn v5_base(&self) -> &'static str {
        match self {
            Region::Us => "https://api.kentik.com/api/v5",
            Region::Eu => "https://api.kentik.eu/api/v5",
        }
    }

    /// Base URL of the v6 gRPC-gateway API.
    pub fn v6_base(&self) -> &'static str {
        match self {
            Region::Us => "https://grpc.api.kentik.com",
            Region::Eu => "https://grpc.api.kentik.eu",
        }
    }
}

/// Credentials and region for authenticating with Kentik.
#[derive(Debug, Clone)]
pub struct KentikConfig {
    /// Account email, sent as `X-CH-Auth-Email`.
    pub email: String,
    /// API token, sent as `X-CH-Auth-API-Token`.
    pub api_token: String,
    /// Deployment region.
    pub region: Region,
}

impl KentikConfig {
    /// Build the configuration from `KENTIK_EMAIL`, `KENTIK_API_TOKEN`, and
    /// the optional `KENTIK_REGION` environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingVar`] when a required variable is unset
    /// or empty.
    pub fn from_env() -> Result<Self, ConfigError> {
        let email = require_var("KENTIK_EMAIL")?;
        let api_token = require_var("KENTIK_API_TOKEN")?;
        let region = std::env::var("KENTIK_REGION")
            .map(|v| Region::parse(&v))
            .unwrap_or_default();

        Ok(Self {
            email,
            api_token,
            region,
        })
    }
}

fn require_var(name: &'static str) -> Result<String, ConfigError> {
    std::env::var(name)
        .ok()
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar { name })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_defaults_to_us() {
        assert_eq!(Region::parse(""), Region::Us);
        assert_eq!(Region::parse("US"), Region::Us);
        assert_eq!(Region::parse("somewhere"), Region::Us);
    }

    #[test]
    fn region_eu_is_case_insensitive() {
        assert_eq!(Region::parse("EU"), Region::Eu);
        assert_eq!(Region::parse("eu"), Region::Eu);
    }

    #[test]
    fn region_base_urls() {
        assert_eq!(Region::Us.v5_base(), "https://api.kentik.com/api/v5");
        assert_eq!(Region::Eu.v6_base(), "https://grpc.api.kentik.eu");
    }
}
