use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    /// The key-value layer failed to read or write.
    #[error("persistence failure: {0:#}")]
    Persistence(anyhow::Error),

    #[error("stored meal history is corrupt: {0}")]
    Corrupt(#[source] serde_json::Error),

    #[error("failed to encode meal history: {0}")]
    Encode(#[source] serde_json::Error),
}

impl StoreError {
    pub fn is_persistence(&self) -> bool {
        matches!(self, Self::Persistence(_))
    }
}
