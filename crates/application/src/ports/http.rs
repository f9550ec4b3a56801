//! HTTP transport port.

use async_trait::async_trait;
use emlak_domain::{ApiRequest, RawResponse};
use thiserror::Error;

/// Transport-level failures. None of these ever trigger the token refresh
/// flow; only an HTTP 401 response does.
#[derive(Debug, Clone, Error)]
pub enum TransportError {
    /// The request exceeded the configured upper bound on wait time.
    #[error("request timed out after {timeout_ms} ms")]
    Timeout {
        /// The configured timeout in milliseconds.
        timeout_ms: u64,
    },

    /// The connection could not be established.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The request URL could not be constructed.
    #[error("invalid URL: {0}")]
    InvalidUrl(String),

    /// Any other transport failure.
    #[error("transport error: {0}")]
    Other(String),
}

/// Port for executing one HTTP exchange against the remote API.
///
/// The transport resolves the request path against its configured base URL
/// and applies the fixed request timeout. Per-attempt headers (bearer
/// token, correlation ID) are passed in by the caller so that a replayed
/// request is decorated from scratch.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Executes the request and returns the raw status and body.
    ///
    /// # Errors
    ///
    /// Returns a [`TransportError`] if the exchange could not complete.
    /// HTTP error statuses are NOT transport errors; they come back as a
    /// [`RawResponse`] for the caller to interpret.
    async fn execute(
        &self,
        request: &ApiRequest,
        headers: &[(String, String)],
    ) -> Result<RawResponse, TransportError>;
}
