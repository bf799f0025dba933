use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum FileStoreError {
    #[error("Storage error: {0}")]
    Io(String),
}

/// Persists an uploaded blob and returns the stored path, which callers
/// feed into `Cv.path`.
#[async_trait]
pub trait FileStore: Send + Sync {
    async fn store(
        &self,
        subdir: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, FileStoreError>;
}
