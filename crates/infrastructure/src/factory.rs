//! Assembly of a ready-to-use client.

use std::sync::Arc;

use emlak_application::{ApiClient, TokenStore, TransportError};

use crate::adapters::ReqwestTransport;
use crate::config::ClientConfig;
use crate::persistence::{FileCredentialStorage, MemoryCredentialStorage};

/// Builds a client with the default adapters: reqwest transport, a JSON
/// file for the durable tier and process memory for the ephemeral tier.
///
/// # Errors
///
/// Returns an error if the HTTP transport cannot be constructed.
pub fn build_client(config: &ClientConfig) -> Result<ApiClient, TransportError> {
    let transport = Arc::new(ReqwestTransport::new(config)?);
    let tokens = TokenStore::new(
        Arc::new(FileCredentialStorage::new(&config.credentials_path)),
        Arc::new(MemoryCredentialStorage::new()),
    );
    Ok(ApiClient::new(transport, tokens))
}
