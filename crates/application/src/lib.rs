//! Emlak Application - Client core
//!
//! This crate holds the authenticated API client: the token store with its
//! two persistence tiers, the refresh coordinator that makes token expiry
//! invisible to callers, and the typed endpoint surface. Transports and
//! storage backends are ports implemented by the infrastructure layer.

pub mod auth;
pub mod client;
pub mod error;
pub mod ports;
pub mod session;

pub use auth::{AuthCoordinator, AuthError, TokenRefresher, TokenStore};
pub use client::ApiClient;
pub use error::{ApiError, ApiResult};
pub use ports::{CredentialStorage, HttpTransport, StorageError, TransportError};
pub use session::SessionEvent;
