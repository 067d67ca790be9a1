//! Errors for the context store layer.

/// Failures while persisting or loading saved query contexts.
#[derive(Debug, thiserror::Error)]
pub enum ContextStoreError {
    /// Reading or writing the backing storage failed.
    #[error("context storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The stored document could not be parsed or encoded.
    #[error("context document is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}
