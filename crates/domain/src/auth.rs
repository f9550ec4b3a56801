//! Authentication credential types.

use serde::{Deserialize, Serialize};

use crate::user::User;

/// The access/refresh token pair owned by the token store for the lifetime
/// of a session.
///
/// Both tokens are always written and cleared together; a pair is never
/// split across storage tiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialPair {
    /// Short-lived credential attached to authenticated requests.
    pub access_token: String,
    /// Longer-lived credential used solely to obtain a new access token.
    pub refresh_token: String,
}

impl CredentialPair {
    /// Creates a new credential pair.
    #[must_use]
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Returns the `Authorization` header value for the access token.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.access_token)
    }
}

/// Persistence tier for stored credentials, chosen once at login by the
/// `remember` flag and reused for every subsequent write until logout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageTier {
    /// Storage surviving process restarts.
    Durable,
    /// Storage scoped to the current session only.
    Ephemeral,
}

impl StorageTier {
    /// Maps the login `remember` flag to a tier.
    #[must_use]
    pub const fn from_remember(remember: bool) -> Self {
        if remember { Self::Durable } else { Self::Ephemeral }
    }

    /// Returns the opposite tier.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Self::Durable => Self::Ephemeral,
            Self::Ephemeral => Self::Durable,
        }
    }
}

/// Request body for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    /// Account email address.
    pub email: String,
    /// Account password.
    pub password: String,
}

/// Response body for `POST /auth/login`.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    /// The freshly issued access token.
    pub access_token: String,
    /// The freshly issued refresh token.
    pub refresh_token: String,
    /// The authenticated user.
    #[serde(rename = "kullanici")]
    pub user: User,
}

/// Response body for `POST /auth/refresh`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenPair {
    /// The new access token.
    pub access_token: String,
    /// The new refresh token.
    pub refresh_token: String,
}

impl From<TokenPair> for CredentialPair {
    fn from(pair: TokenPair) -> Self {
        Self {
            access_token: pair.access_token,
            refresh_token: pair.refresh_token,
        }
    }
}
