//! Credential storage backends.
//!
//! The durable tier is a JSON file on disk; the ephemeral tier lives in
//! process memory and is gone on restart.

mod file_storage;
mod memory_storage;

pub use file_storage::FileCredentialStorage;
pub use memory_storage::MemoryCredentialStorage;
