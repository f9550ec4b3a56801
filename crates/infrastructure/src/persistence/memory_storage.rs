//! In-memory credential storage.

use async_trait::async_trait;
use emlak_application::{CredentialStorage, StorageError};
use emlak_domain::CredentialPair;
use tokio::sync::RwLock;

/// Credential storage scoped to the process lifetime. Backs the ephemeral
/// tier: tokens stored here are gone on restart, which is exactly the
/// semantics of logging in without "remember me".
#[derive(Debug, Default)]
pub struct MemoryCredentialStorage {
    pair: RwLock<Option<CredentialPair>>,
}

impl MemoryCredentialStorage {
    /// Creates an empty storage.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl CredentialStorage for MemoryCredentialStorage {
    async fn load(&self) -> Result<Option<CredentialPair>, StorageError> {
        Ok(self.pair.read().await.clone())
    }

    async fn save(&self, pair: &CredentialPair) -> Result<(), StorageError> {
        *self.pair.write().await = Some(pair.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), StorageError> {
        *self.pair.write().await = None;
        Ok(())
    }
}
