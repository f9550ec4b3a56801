//! Two-tier token storage.
//!
//! Single source of truth for the current credential pair. The durable
//! tier survives restarts ("remember me"); the ephemeral tier lives for
//! the current session only. Both tokens of a pair always live in the
//! same tier.

use std::sync::Arc;

use emlak_domain::{CredentialPair, StorageTier};
use tracing::debug;

use crate::ports::{CredentialStorage, StorageError};

/// Token store backed by one storage adapter per tier.
#[derive(Clone)]
pub struct TokenStore {
    durable: Arc<dyn CredentialStorage>,
    ephemeral: Arc<dyn CredentialStorage>,
}

impl TokenStore {
    /// Creates a store over the given tier backends.
    #[must_use]
    pub fn new(durable: Arc<dyn CredentialStorage>, ephemeral: Arc<dyn CredentialStorage>) -> Self {
        Self { durable, ephemeral }
    }

    fn tier_backend(&self, tier: StorageTier) -> &dyn CredentialStorage {
        match tier {
            StorageTier::Durable => self.durable.as_ref(),
            StorageTier::Ephemeral => self.ephemeral.as_ref(),
        }
    }

    /// Reads the current credential pair, checking the durable tier first,
    /// then the ephemeral tier. Returns the tier the pair was found in so
    /// that a later refresh can write back to the same tier.
    ///
    /// Absence is a valid state (unauthenticated), not an error.
    ///
    /// # Errors
    ///
    /// Returns an error if a backing store cannot be read.
    pub async fn read(&self) -> Result<Option<(CredentialPair, StorageTier)>, StorageError> {
        if let Some(pair) = self.durable.load().await? {
            return Ok(Some((pair, StorageTier::Durable)));
        }
        if let Some(pair) = self.ephemeral.load().await? {
            return Ok(Some((pair, StorageTier::Ephemeral)));
        }
        Ok(None)
    }

    /// Reads just the access token, if any.
    ///
    /// # Errors
    ///
    /// Returns an error if a backing store cannot be read.
    pub async fn access_token(&self) -> Result<Option<String>, StorageError> {
        Ok(self.read().await?.map(|(pair, _)| pair.access_token))
    }

    /// Overwrites both tokens in the selected tier and clears the other
    /// tier, so the two tiers are never simultaneously populated (a tier
    /// switch at re-login must not leave stale tokens behind).
    ///
    /// # Errors
    ///
    /// Returns an error if a backing store cannot be written.
    pub async fn store(&self, pair: &CredentialPair, tier: StorageTier) -> Result<(), StorageError> {
        self.tier_backend(tier).save(pair).await?;
        self.tier_backend(tier.other()).clear().await?;
        debug!(tier = ?tier, "stored credential pair");
        Ok(())
    }

    /// Removes tokens from both tiers unconditionally. Idempotent: safe to
    /// call when nothing is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if a backing store cannot be modified.
    pub async fn clear(&self) -> Result<(), StorageError> {
        self.durable.clear().await?;
        self.ephemeral.clear().await?;
        debug!("cleared credential pair from both tiers");
        Ok(())
    }
}
