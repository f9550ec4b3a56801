//! Credential storage port.

use async_trait::async_trait;
use emlak_domain::CredentialPair;
use thiserror::Error;

/// Storage-level failures.
#[derive(Debug, Clone, Error)]
pub enum StorageError {
    /// An I/O operation failed.
    #[error("storage I/O error: {0}")]
    Io(String),

    /// Stored data could not be encoded or decoded.
    #[error("storage serialization error: {0}")]
    Serialization(String),
}

/// Port for one persistence tier holding at most one credential pair.
///
/// Implementations back the durable tier (survives restarts) and the
/// ephemeral tier (process lifetime only). Both tokens of a pair are
/// always written and removed together.
#[async_trait]
pub trait CredentialStorage: Send + Sync {
    /// Loads the stored pair, if any. Absence is a valid state.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read.
    async fn load(&self) -> Result<Option<CredentialPair>, StorageError>;

    /// Overwrites the stored pair atomically.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be written.
    async fn save(&self, pair: &CredentialPair) -> Result<(), StorageError>;

    /// Removes the stored pair. Must be idempotent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be modified.
    async fn clear(&self) -> Result<(), StorageError>;
}
