//! Port definitions (interfaces)
//!
//! Ports define the boundaries between the client core and external
//! systems. Each port is a trait implemented by an adapter in the
//! infrastructure layer.

mod http;
mod storage;

pub use http::{HttpTransport, TransportError};
pub use storage::{CredentialStorage, StorageError};
