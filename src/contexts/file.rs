//! File-backed context store.
//!
//! Contexts are kept as one pretty-printed JSON document, by default
//! `~/.kentik-mcp-contexts.json`. The file is small (tens of entries at
//! most), so every operation loads and rewrites the whole document; a
//! missing file reads as an empty store.

use crate::contexts::{ContextStore, ContextStoreError, QueryContext};
use serde::{Deserialize, Serialize};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// File name used inside the home directory.
pub const DEFAULT_FILE_NAME: &str = ".kentik-mcp-contexts.json";

/// [`ContextStore`] backed by a JSON file on disk.
#[derive(Debug, Clone)]
pub struct FileContextStore {
    path: PathBuf,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ContextDocument {
    #[serde(default)]
    contexts: Vec<QueryContext>,
}

impl FileContextStore {
    /// Create a store backed by the given file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Create a store at [`DEFAULT_FILE_NAME`] in the user's home directory.
    ///
    /// Returns `None` when no home directory can be determined.
    pub fn in_home_dir() -> Option<Self> {
        directories::BaseDirs::new().map(|dirs| Self::new(dirs.home_dir().join(DEFAULT_FILE_NAME)))
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn load(&self) -> Result<ContextDocument, ContextStoreError> {
        match tokio::fs::read(&self.path).await {
            Ok(bytes) => Ok(serde_json::from_slice(&bytes)?),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(ContextDocument::default()),
            Err(err) => Err(err.into()),
        }
    }

    async fn save(&self, document: &ContextDocument) -> Result<(), ContextStoreError> {
        let data = serde_json::to_vec_pretty(document)?;
        tokio::fs::write(&self.path, data).await?;
        Ok(())
    }
}

impl ContextStore for FileContextStore {
    async fn put(&self, context: QueryContext) -> Result<(), ContextStoreError> {
        let mut document = self.load().await?;
        match document
            .contexts
            .iter_mut()
            .find(|c| c.name.eq_ignore_ascii_case(&context.name))
        {
            Some(existing) => *existing = context,
            None => document.contexts.push(context),
        }
        self.save(&document).await
    }

    async fn get(&self, name: &str) -> Result<Option<QueryContext>, ContextStoreError> {
        let document = self.load().await?;
        Ok(document
            .contexts
            .into_iter()
            .find(|c| c.name.eq_ignore_ascii_case(name)))
    }

    async fn delete(&self, name: &str) -> Result<bool, ContextStoreError> {
        let mut document = self.load().await?;
        let before = document.contexts.len();
        document
            .contexts
            .retain(|c| !c.name.eq_ignore_ascii_case(name));

        let existed = document.contexts.len() != before;
        if existed {
            self.save(&document).await?;
        }
        Ok(existed)
    }

    async fn list(&self) -> Result<Vec<QueryContext>, ContextStoreError> {
        Ok(self.load().await?.contexts)
    }
}
