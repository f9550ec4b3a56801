//! Account and session endpoints.

use emlak_domain::{
    ApiRequest, AuthResponse, ChangePasswordRequest, CredentialPair, LoginRequest,
    PreferencesUpdate, ProfileUpdate, StorageTier, User, UserPreferences, GENERIC_ERROR_MESSAGE,
};
use serde::Deserialize;
use tracing::debug;

use super::ApiClient;
use crate::error::{ApiError, ApiResult};
use crate::session::SessionEvent;

/// Response shape of the endpoints that return the account under
/// `kullanici` instead of `veri`.
#[derive(Debug, Deserialize)]
struct AccountEnvelope {
    #[serde(rename = "basarili")]
    success: bool,
    #[serde(rename = "kullanici")]
    user: Option<User>,
    #[serde(rename = "mesaj")]
    message: Option<String>,
    #[serde(rename = "hata_kodu")]
    error_code: Option<String>,
}

impl ApiClient {
    /// Authenticates and stores the issued token pair. The `remember` flag
    /// selects the storage tier once; every refresh re-uses it.
    ///
    /// Sent without a bearer token and outside the refresh flow: a 401
    /// here means wrong credentials, not an expired session.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with the backend's message on rejected
    /// credentials.
    pub async fn login(
        &self,
        email: impl Into<String>,
        password: impl Into<String>,
        remember: bool,
    ) -> ApiResult<User> {
        let body = Self::to_json(&LoginRequest {
            email: email.into(),
            password: password.into(),
        })?;
        let request = ApiRequest::post("/auth/login").with_json(body);
        let response = self.send(&request, None).await?;
        let auth: AuthResponse = Self::decode(&response)?;

        let pair = CredentialPair::new(auth.access_token, auth.refresh_token);
        self.tokens
            .store(&pair, StorageTier::from_remember(remember))
            .await?;
        Ok(auth.user)
    }

    /// Ends the session: notifies the backend (best effort), clears both
    /// storage tiers and emits [`SessionEvent::LoggedOut`].
    ///
    /// # Errors
    ///
    /// Returns an error only when local token storage cannot be cleared;
    /// a failing logout endpoint does not keep the session alive.
    pub async fn logout(&self) -> ApiResult<()> {
        if let Err(error) = self.request_unit(ApiRequest::post("/auth/logout")).await {
            debug!(%error, "logout endpoint failed, clearing local session anyway");
        }
        self.tokens.clear().await?;
        let _ = self.session_events.send(SessionEvent::LoggedOut);
        Ok(())
    }

    /// Fetches the authenticated account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn current_user(&self) -> ApiResult<User> {
        self.request_account(ApiRequest::get("/auth/me")).await
    }

    /// Updates profile fields and returns the updated account.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ApiResult<User> {
        let request = ApiRequest::patch("/auth/profile").with_json(Self::to_json(update)?);
        self.request_account(request).await
    }

    /// Updates dashboard preferences; absent fields are left unchanged.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the session is expired.
    pub async fn update_preferences(
        &self,
        update: &PreferencesUpdate,
    ) -> ApiResult<UserPreferences> {
        let request = ApiRequest::patch("/auth/preferences").with_json(Self::to_json(update)?);
        self.request_enveloped(request).await
    }

    /// Changes the account password.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Api`] with per-field messages when the backend
    /// rejects the new password.
    pub async fn change_password(&self, request: &ChangePasswordRequest) -> ApiResult<()> {
        let request = ApiRequest::post("/auth/change-password").with_json(Self::to_json(request)?);
        self.request_unit(request).await
    }

    /// Executes and unwraps an account-carrying envelope. A success status
    /// with `basarili: false` surfaces the envelope's message, exactly
    /// like the `veri`-carrying endpoints do.
    async fn request_account(&self, request: ApiRequest) -> ApiResult<User> {
        let response = self.execute(&request).await?;
        let envelope: AccountEnvelope = Self::decode(&response)?;
        if !envelope.success {
            return Err(ApiError::Api {
                status: response.status,
                message: envelope
                    .message
                    .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string()),
                code: envelope.error_code,
            });
        }
        envelope
            .user
            .ok_or_else(|| ApiError::Decode("account payload missing".to_string()))
    }
}
