//! Client configuration.

use std::path::PathBuf;

/// Base URL used when `EMLAK_API_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api/v1";

/// Request timeout applied to every call, in milliseconds.
pub const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// `Accept-Language` value sent with every request; the backend localizes
/// envelope messages from it.
pub const DEFAULT_ACCEPT_LANGUAGE: &str = "tr";

/// Configuration for assembling a client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL every request path is appended to, including any path
    /// prefix such as `/api/v1`.
    pub base_url: String,
    /// Upper bound on the wait for one HTTP exchange, in milliseconds.
    pub timeout_ms: u64,
    /// `Accept-Language` header value.
    pub accept_language: String,
    /// File backing the durable credential tier.
    pub credentials_path: PathBuf,
}

impl ClientConfig {
    /// Creates a configuration with the given base URL and defaults for
    /// everything else.
    #[must_use]
    pub fn new(base_url: impl Into<String>, credentials_path: impl Into<PathBuf>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_ms: DEFAULT_TIMEOUT_MS,
            accept_language: DEFAULT_ACCEPT_LANGUAGE.to_string(),
            credentials_path: credentials_path.into(),
        }
    }

    /// Creates a configuration from the environment: `EMLAK_API_BASE_URL`
    /// overrides the default base URL.
    #[must_use]
    pub fn from_env(credentials_path: impl Into<PathBuf>) -> Self {
        let base_url =
            std::env::var("EMLAK_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url, credentials_path)
    }

    /// Overrides the request timeout.
    #[must_use]
    pub const fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = timeout_ms;
        self
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::new(DEFAULT_BASE_URL, "/tmp/creds.json");
        assert_eq!(config.timeout_ms, DEFAULT_TIMEOUT_MS);
        assert_eq!(config.accept_language, "tr");
    }
}
