//! Client error types.

use thiserror::Error;

use crate::auth::AuthError;
use crate::ports::{StorageError, TransportError};

/// Errors surfaced by the API client.
///
/// The client recovers exactly one class of failure internally (a single
/// expired-token cycle per request) and re-surfaces everything else.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend rejected the request. `message` is the user-visible
    /// text extracted from the response envelope, or the generic fallback
    /// when the envelope carried none.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// User-visible message.
        message: String,
        /// Machine-readable error code, when provided.
        code: Option<String>,
    },

    /// The session could not be recovered: the refresh exchange failed or
    /// no refresh token existed. Tokens have been cleared and a
    /// session-expired event emitted.
    #[error("session expired: {0}")]
    SessionExpired(#[source] AuthError),

    /// A transport failure (timeout, connection error). Never retried by
    /// the client.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Token storage failed.
    #[error(transparent)]
    Storage(#[from] StorageError),

    /// A request body could not be encoded.
    #[error("failed to encode request: {0}")]
    Encode(String),

    /// A response body could not be decoded.
    #[error("failed to decode response: {0}")]
    Decode(String),
}

/// Result type alias for client operations.
pub type ApiResult<T> = Result<T, ApiError>;
