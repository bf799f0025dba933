use std::path::{Path, PathBuf};

use async_trait::async_trait;
use rand::Rng;
use uuid::Uuid;

use crate::files::application::ports::outgoing::{FileStore, FileStoreError};

#[derive(Debug, Clone)]
pub struct DiskFileStore {
    root: PathBuf,
}

impl DiskFileStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn from_env() -> Self {
        let root = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "./uploads".to_string());
        Self::new(root)
    }
}

#[async_trait]
impl FileStore for DiskFileStore {
    async fn store(
        &self,
        subdir: &str,
        file_name: &str,
        bytes: &[u8],
    ) -> Result<String, FileStoreError> {
        let dir = if subdir.is_empty() {
            self.root.clone()
        } else {
            self.root.join(subdir)
        };

        tokio::fs::create_dir_all(&dir)
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))?;

        let target = dir.join(file_name);
        tokio::fs::write(&target, bytes)
            .await
            .map_err(|e| FileStoreError::Io(e.to_string()))?;

        Ok(target.to_string_lossy().into_owned())
    }
}

fn extension_of(original: &str) -> Option<String> {
    Path::new(original)
        .extension()
        .map(|ext| ext.to_string_lossy().into_owned())
}

/// Generic uploads: uuid name, collision-free without coordination.
pub fn image_file_name(original: &str) -> String {
    match extension_of(original) {
        Some(ext) => format!("{}.{ext}", Uuid::new_v4()),
        None => Uuid::new_v4().to_string(),
    }
}

/// CV uploads: timestamp plus random suffix, original extension kept.
pub fn cv_file_name(original: &str) -> String {
    let stamp = chrono::Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen_range(0..1_000_000_000);
    match extension_of(original) {
        Some(ext) => format!("{stamp}-{suffix}.{ext}"),
        None => format!("{stamp}-{suffix}"),
    }
}
