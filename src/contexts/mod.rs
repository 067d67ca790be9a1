//! Saved query contexts.
//!
//! A context is a named bundle of query parameters (device groups, sites,
//! filters) an agent can save once and reapply by name in later
//! conversations. The store sits behind a small get/put/delete/list trait so
//! the tool handlers stay independent of where contexts live: the production
//! backend is a JSON document in the user's home directory
//! ([`FileContextStore`]), and an in-memory backend ([`InMemoryContextStore`])
//! serves tests and embedders.
//!
//! Context names are matched case-insensitively everywhere (lookup, replace,
//! delete) but stored with their original casing.

pub mod errors;
pub mod file;
pub mod in_memory;

pub use errors::ContextStoreError;
pub use file::FileContextStore;
pub use in_memory::InMemoryContextStore;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::future::Future;

/// A saved set of query parameters, reusable by name.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct QueryContext {
    /// Unique (case-insensitive) name, e.g. `borders` or `external-traffic`.
    pub name: String,
    /// Human-readable description of what the context covers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Comma-delimited device names.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_names: Option<String>,
    /// Site name.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_name: Option<String>,
    /// Device label.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub device_label: Option<String>,
    /// Destination connectivity type filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst_connect_type: Option<String>,
    /// Source connectivity type filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_connect_type: Option<String>,
    /// Port filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    /// Destination AS filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dst_as: Option<String>,
    /// Source AS filter.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub src_as: Option<String>,
    /// Free-form tags.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
    /// When the context was last saved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_at: Option<DateTime<Utc>>,
}

impl QueryContext {
    /// Create an empty context with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// Storage collaborator for named query contexts.
///
/// Implementations must be safe for concurrent use; tool handlers share one
/// store across invocations.
pub trait ContextStore: Send + Sync {
    /// Save a context, replacing any existing context with the same
    /// (case-insensitive) name.
    fn put(
        &self,
        context: QueryContext,
    ) -> impl Future<Output = Result<(), ContextStoreError>> + Send;

    /// Look up a context by name.
    fn get(
        &self,
        name: &str,
    ) -> impl Future<Output = Result<Option<QueryContext>, ContextStoreError>> + Send;

    /// Delete a context by name. Returns whether it existed.
    fn delete(&self, name: &str) -> impl Future<Output = Result<bool, ContextStoreError>> + Send;

    /// List all saved contexts in storage order.
    fn list(&self) -> impl Future<Output = Result<Vec<QueryContext>, ContextStoreError>> + Send;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_fields_are_omitted_from_json() {
        let context = QueryContext::new("borders");
        let encoded = serde_json::to_value(&context).unwrap();
        assert_eq!(encoded, serde_json::json!({"name": "borders"}));
    }

    #[test]
    fn round_trips_through_json() {
        let context = QueryContext {
            name: "edge".to_string(),
            description: Some("edge routers".to_string()),
            device_label: Some("edge".to_string()),
            tags: vec!["prod".to_string()],
            ..QueryContext::default()
        };
        let encoded = serde_json::to_string(&context).unwrap();
        let decoded: QueryContext = serde_json::from_str(&encoded).unwrap();
        assert_eq!(decoded, context);
    }
}
