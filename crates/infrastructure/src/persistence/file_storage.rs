//! File-backed credential storage.
//!
//! Backs the durable tier ("remember me"). The credential pair is stored
//! as a small JSON file; the file should be kept out of version control.

use std::io::ErrorKind;
use std::path::PathBuf;

use async_trait::async_trait;
use emlak_application::{CredentialStorage, StorageError};
use emlak_domain::CredentialPair;

/// Credential storage persisting to a JSON file.
#[derive(Debug, Clone)]
pub struct FileCredentialStorage {
    path: PathBuf,
}

impl FileCredentialStorage {
    /// Creates a storage writing to the given file path.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl CredentialStorage for FileCredentialStorage {
    async fn load(&self) -> Result<Option<CredentialPair>, StorageError> {
        let content = match tokio::fs::read(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(StorageError::Io(e.to_string())),
        };
        let pair = serde_json::from_slice(&content)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(Some(pair))
    }

    async fn save(&self, pair: &CredentialPair) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Io(e.to_string()))?;
        }
        let content =
            serde_json::to_vec_pretty(pair).map_err(|e| StorageError::Serialization(e.to_string()))?;
        tokio::fs::write(&self.path, content)
            .await
            .map_err(|e| StorageError::Io(e.to_string()))
    }

    async fn clear(&self) -> Result<(), StorageError> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(StorageError::Io(e.to_string())),
        }
    }
}
