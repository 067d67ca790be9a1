//! In-memory context store for tests and embedding.

use crate::contexts::{ContextStore, ContextStoreError, QueryContext};
use std::sync::Arc;
use tokio::sync::RwLock;

/// Thread-safe in-memory [`ContextStore`].
///
/// Keeps contexts in insertion order, matching the file-backed store's
/// listing behavior.
#[derive(Debug, Clone, Default)]
pub struct InMemoryContextStore {
    contexts: Arc<RwLock<Vec<QueryContext>>>,
}

impl InMemoryContextStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContextStore for InMemoryContextStore {
    async fn put(&self, context: QueryContext) -> Result<(), ContextStoreError> {
        let mut contexts = self.contexts.write().await;
        match contexts
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(&context.name))
        {
            Some(existing) => *existing = context,
            None => contexts.push(context),
        }
        Ok(())
    }

    async fn get(&self, name: &str) -> Result<Option<QueryContext>, ContextStoreError> {
        let contexts = self.contexts.read().await;
        Ok(contexts
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    async fn delete(&self, name: &str) -> Result<bool, ContextStoreError> {
        let mut contexts = self.contexts.write().await;
        let before = contexts.len();
        contexts.retain(|c| !c.name.eq_ignore_ascii_case(name));
        Ok(contexts.len() != before)
    }

    async fn list(&self) -> Result<Vec<QueryContext>, ContextStoreError> {
        Ok(self.contexts.read().await.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_then_get_round_trips() {
        let store = InMemoryContextStore::new();
        store.put(QueryContext::new("Borders")).await.unwrap();

        let found = store.get("borders").await.unwrap();
        assert_eq!(found.unwrap().name, "Borders");
    }

    #[tokio::test]
    async fn put_replaces_case_insensitively() {
        let store = InMemoryContextStore::new();
        store.put(QueryContext::new("edge")).await.unwrap();

        let mut updated = QueryContext::new("EDGE");
        updated.description = Some("updated".to_string());
        store.put(updated).await.unwrap();

        let all = store.list().await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].description.as_deref(), Some("updated"));
    }

    #[tokio::test]
    async fn delete_reports_existence() {
        let store = InMemoryContextStore::new();
        store.put(QueryContext::new("core")).await.unwrap();

        assert!(store.delete("CORE").await.unwrap());
        assert!(!store.delete("core").await.unwrap());
        assert!(store.list().await.unwrap().is_empty());
    }
}
