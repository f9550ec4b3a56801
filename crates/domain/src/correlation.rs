//! Correlation ID generation.

use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Per-request unique identifier for cross-system request tracing.
///
/// A fresh ID is generated for every outgoing request attempt and sent in
/// the `X-Correlation-ID` header; IDs are never reused.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CorrelationId(String);

impl CorrelationId {
    /// Header name carrying the correlation ID.
    pub const HEADER: &'static str = "X-Correlation-ID";

    /// Generates a new random correlation ID.
    #[must_use]
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    /// Returns the ID as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CorrelationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
