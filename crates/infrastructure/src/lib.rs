//! Emlak Infrastructure - Adapters for the Emlak API client
//!
//! Implements the application layer's ports: the reqwest-backed HTTP
//! transport, file-backed and in-memory credential storage, and the
//! factory that wires a ready-to-use [`emlak_application::ApiClient`].

pub mod adapters;
pub mod config;
pub mod factory;
pub mod persistence;

pub use adapters::ReqwestTransport;
pub use config::ClientConfig;
pub use factory::build_client;
pub use persistence::{FileCredentialStorage, MemoryCredentialStorage};
