//! Authentication module for the Emlak API client.
//!
//! This module provides:
//! - The two-tier token store (durable vs. session-scoped)
//! - The refresh coordinator guaranteeing at most one refresh exchange
//!   in flight at any time
//! - The refresher trait the coordinator uses to talk to the backend

mod coordinator;
mod token_store;

pub use coordinator::{AuthCoordinator, AuthError, TokenRefresher};
pub use token_store::TokenStore;
