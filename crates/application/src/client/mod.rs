//! The authenticated API client.
//!
//! Wraps every call with credential attachment, a per-attempt correlation
//! ID, and a single transparent refresh-and-replay cycle on authorization
//! failure. Endpoint wrappers live in the sibling modules and all funnel
//! through [`ApiClient::execute`].

mod account;
mod ai;
mod dashboard;
mod favorites;
mod importing;
mod listings;
mod search;

use std::sync::Arc;

use async_trait::async_trait;
use emlak_domain::{
    ApiRequest, CorrelationId, Envelope, RawResponse, ResultList, TokenPair,
    GENERIC_ERROR_MESSAGE,
};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::sync::broadcast;
use tracing::debug;

use crate::auth::{AuthCoordinator, AuthError, TokenRefresher, TokenStore};
use crate::error::{ApiError, ApiResult};
use crate::ports::HttpTransport;
use crate::session::SessionEvent;

/// Authenticated client for the Emlak backend.
///
/// Cheap to clone via the shared transport; all mutable state (tokens,
/// refresh coordination) is owned by this object rather than globals, so
/// independent clients never interfere.
pub struct ApiClient {
    transport: Arc<dyn HttpTransport>,
    tokens: TokenStore,
    coordinator: AuthCoordinator,
    session_events: broadcast::Sender<SessionEvent>,
}

impl ApiClient {
    /// Creates a client over the given transport and token store.
    #[must_use]
    pub fn new(transport: Arc<dyn HttpTransport>, tokens: TokenStore) -> Self {
        let (session_events, _) = broadcast::channel(16);
        Self {
            transport,
            tokens,
            coordinator: AuthCoordinator::new(session_events.clone()),
            session_events,
        }
    }

    /// Access to the underlying token store.
    #[must_use]
    pub const fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Subscribes to session lifecycle events. The host application reacts
    /// to [`SessionEvent::Expired`] by presenting its login entry point.
    #[must_use]
    pub fn subscribe_session_events(&self) -> broadcast::Receiver<SessionEvent> {
        self.session_events.subscribe()
    }

    /// Executes a request with credential attachment and at most one
    /// transparent refresh-and-replay cycle.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::SessionExpired`] when the refresh flow is
    /// exhausted, and transport/storage errors as-is. Non-401 HTTP error
    /// statuses are returned inside the [`RawResponse`] for the decoding
    /// helpers to interpret.
    pub async fn execute(&self, request: &ApiRequest) -> ApiResult<RawResponse> {
        let access_token = self.tokens.access_token().await?;
        let response = self.send(request, access_token.as_deref()).await?;

        if !response.is_unauthorized() {
            return Ok(response);
        }

        debug!(path = %request.path, "authorization failed, entering refresh flow");
        let refresher = HttpRefresher {
            transport: self.transport.as_ref(),
        };
        let fresh_token = self
            .coordinator
            .refresh_access_token(&self.tokens, &refresher)
            .await
            .map_err(ApiError::SessionExpired)?;

        // Exactly one replay per original request; if the refreshed token
        // is also rejected, the second 401 is surfaced like any other
        // API failure.
        self.send(request, Some(&fresh_token)).await
    }

    /// Sends one attempt: bearer header when a token is present, plus a
    /// freshly generated correlation ID. Replays re-enter here and are
    /// decorated from scratch.
    async fn send(
        &self,
        request: &ApiRequest,
        access_token: Option<&str>,
    ) -> ApiResult<RawResponse> {
        let mut headers = vec![(
            CorrelationId::HEADER.to_string(),
            CorrelationId::generate().to_string(),
        )];
        if let Some(token) = access_token {
            headers.push(("Authorization".to_string(), format!("Bearer {token}")));
        }
        Ok(self.transport.execute(request, &headers).await?)
    }

    /// Executes and decodes a bare JSON payload (no envelope nesting).
    pub(crate) async fn request_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> ApiResult<T> {
        let response = self.execute(&request).await?;
        Self::decode(&response)
    }

    /// Executes and unwraps a `{basarili, veri}` envelope, requiring the
    /// payload to be present.
    pub(crate) async fn request_enveloped<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> ApiResult<T> {
        let response = self.execute(&request).await?;
        let envelope: Envelope<T> = Self::decode(&response)?;
        if !envelope.success {
            return Err(ApiError::Api {
                status: response.status,
                message: envelope.message_or_default(),
                code: envelope.error_code,
            });
        }
        envelope
            .data
            .ok_or_else(|| ApiError::Decode("envelope payload missing".to_string()))
    }

    /// Executes and unwraps a `{basarili, sonuclar}` list response.
    pub(crate) async fn request_list<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> ApiResult<Vec<T>> {
        let response = self.execute(&request).await?;
        let list: ResultList<T> = Self::decode(&response)?;
        Ok(list.results)
    }

    /// Executes a request where only the success flag matters. A 2xx with
    /// an empty or non-envelope body counts as success.
    pub(crate) async fn request_unit(&self, request: ApiRequest) -> ApiResult<()> {
        let response = self.execute(&request).await?;
        if !response.is_success() {
            return Err(Self::error_from(&response));
        }
        if let Ok(envelope) = serde_json::from_slice::<Envelope<serde_json::Value>>(&response.body)
        {
            if !envelope.success {
                return Err(ApiError::Api {
                    status: response.status,
                    message: envelope.message_or_default(),
                    code: envelope.error_code,
                });
            }
        }
        Ok(())
    }

    /// Decodes a successful response body, mapping HTTP error statuses to
    /// [`ApiError::Api`] with the envelope's message.
    fn decode<T: DeserializeOwned>(response: &RawResponse) -> ApiResult<T> {
        if !response.is_success() {
            return Err(Self::error_from(response));
        }
        serde_json::from_slice(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
    }

    /// Builds the user-visible error for a failed response: the envelope's
    /// `mesaj` when present, the generic fallback otherwise.
    fn error_from(response: &RawResponse) -> ApiError {
        let envelope: Option<Envelope<serde_json::Value>> =
            serde_json::from_slice(&response.body).ok();
        let message = envelope
            .as_ref()
            .map_or_else(|| GENERIC_ERROR_MESSAGE.to_string(), Envelope::message_or_default);
        ApiError::Api {
            status: response.status,
            message,
            code: envelope.and_then(|e| e.error_code),
        }
    }

    /// Serializes a typed request body to JSON.
    pub(crate) fn to_json<T: Serialize>(body: &T) -> ApiResult<serde_json::Value> {
        serde_json::to_value(body).map_err(|e| ApiError::Encode(e.to_string()))
    }

    /// Flattens a typed query struct into key/value pairs.
    pub(crate) fn query_pairs<T: Serialize>(query: &T) -> ApiResult<Vec<(String, String)>> {
        let value = Self::to_json(query)?;
        let Some(map) = value.as_object() else {
            return Err(ApiError::Encode("query must serialize to an object".to_string()));
        };
        Ok(map
            .iter()
            .map(|(key, value)| {
                let rendered = match value {
                    serde_json::Value::String(s) => s.clone(),
                    other => other.to_string(),
                };
                (key.clone(), rendered)
            })
            .collect())
    }
}

/// Refresher issuing the real `POST /auth/refresh` exchange. Unlike every
/// other call, this one never carries a bearer token and never re-enters
/// the refresh flow.
struct HttpRefresher<'a> {
    transport: &'a dyn HttpTransport,
}

#[async_trait]
impl TokenRefresher for HttpRefresher<'_> {
    async fn exchange(&self, refresh_token: &str) -> Result<TokenPair, AuthError> {
        let request = ApiRequest::post("/auth/refresh")
            .with_json(serde_json::json!({ "refresh": refresh_token }));
        let headers = vec![(
            CorrelationId::HEADER.to_string(),
            CorrelationId::generate().to_string(),
        )];

        let response = self
            .transport
            .execute(&request, &headers)
            .await
            .map_err(|e| AuthError::RefreshFailed { message: e.to_string() })?;

        if !response.is_success() {
            let envelope: Option<Envelope<serde_json::Value>> =
                serde_json::from_slice(&response.body).ok();
            let message = envelope
                .as_ref()
                .map_or_else(|| GENERIC_ERROR_MESSAGE.to_string(), Envelope::message_or_default);
            return Err(AuthError::RefreshFailed { message });
        }

        serde_json::from_slice(&response.body)
            .map_err(|e| AuthError::RefreshFailed { message: e.to_string() })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]
mod tests {
    use std::collections::HashSet;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;
    use std::time::Duration;

    use emlak_domain::{CredentialPair, StorageTier};
    use pretty_assertions::assert_eq;
    use tokio::sync::RwLock;

    use super::*;
    use crate::ports::{CredentialStorage, StorageError, TransportError};

    #[derive(Default)]
    struct MemoryTier {
        pair: RwLock<Option<CredentialPair>>,
    }

    #[async_trait]
    impl CredentialStorage for MemoryTier {
        async fn load(&self) -> Result<Option<CredentialPair>, StorageError> {
            Ok(self.pair.read().await.clone())
        }

        async fn save(&self, pair: &CredentialPair) -> Result<(), StorageError> {
            *self.pair.write().await = Some(pair.clone());
            Ok(())
        }

        async fn clear(&self) -> Result<(), StorageError> {
            *self.pair.write().await = None;
            Ok(())
        }
    }

    /// Scripted backend. Accepts requests bearing `valid_token`, rejects
    /// everything else with a 401 envelope, and serves the auth routes.
    struct FakeBackend {
        valid_token: Mutex<String>,
        refreshed_token: &'static str,
        refresh_calls: AtomicUsize,
        refresh_fails: bool,
        captured_headers: Mutex<Vec<Vec<(String, String)>>>,
    }

    impl FakeBackend {
        fn new(valid_token: &str) -> Self {
            Self {
                valid_token: Mutex::new(valid_token.to_string()),
                refreshed_token: "A2",
                refresh_calls: AtomicUsize::new(0),
                refresh_fails: false,
                captured_headers: Mutex::new(Vec::new()),
            }
        }

        fn with_failing_refresh(valid_token: &str) -> Self {
            Self {
                refresh_fails: true,
                ..Self::new(valid_token)
            }
        }

        /// Backend whose refresh hands out a token it will still reject.
        fn with_useless_refresh(valid_token: &str) -> Self {
            Self {
                refreshed_token: "A-rejected",
                ..Self::new(valid_token)
            }
        }

        fn refresh_count(&self) -> usize {
            self.refresh_calls.load(Ordering::SeqCst)
        }

        fn authorization_headers(&self) -> Vec<Option<String>> {
            self.captured_headers
                .lock()
                .unwrap()
                .iter()
                .map(|headers| {
                    headers
                        .iter()
                        .find(|(name, _)| name == "Authorization")
                        .map(|(_, value)| value.clone())
                })
                .collect()
        }

        fn correlation_ids(&self) -> Vec<String> {
            self.captured_headers
                .lock()
                .unwrap()
                .iter()
                .filter_map(|headers| {
                    headers
                        .iter()
                        .find(|(name, _)| name == CorrelationId::HEADER)
                        .map(|(_, value)| value.clone())
                })
                .collect()
        }

        fn ok_body() -> Vec<u8> {
            br#"{"basarili": true, "veri": {"toplam_ilan": 5, "bugun_arama": 2, "favori_sayisi": 1}}"#
                .to_vec()
        }
    }

    #[async_trait]
    impl HttpTransport for FakeBackend {
        async fn execute(
            &self,
            request: &ApiRequest,
            headers: &[(String, String)],
        ) -> Result<RawResponse, TransportError> {
            self.captured_headers.lock().unwrap().push(headers.to_vec());

            if request.path == "/auth/refresh" {
                self.refresh_calls.fetch_add(1, Ordering::SeqCst);
                // Hold the exchange open so concurrent 401 observers queue.
                tokio::time::sleep(Duration::from_millis(20)).await;
                if self.refresh_fails {
                    return Ok(RawResponse::new(
                        401,
                        r#"{"basarili": false, "mesaj": "Oturum geçersiz"}"#.as_bytes().to_vec(),
                    ));
                }
                if self.refreshed_token == "A2" {
                    *self.valid_token.lock().unwrap() = "A2".to_string();
                }
                let body = format!(
                    r#"{{"access_token": "{}", "refresh_token": "R2"}}"#,
                    self.refreshed_token
                );
                return Ok(RawResponse::new(200, body.into_bytes()));
            }

            if request.path == "/auth/login" {
                let body = br#"{
                    "access_token": "A1",
                    "refresh_token": "R1",
                    "kullanici": {"id": 1, "ad_soyad": "Test", "email": "t@example.com", "rol": "profesyonel"}
                }"#;
                return Ok(RawResponse::new(200, body.to_vec()));
            }

            let expected = format!("Bearer {}", self.valid_token.lock().unwrap());
            let authorized = headers
                .iter()
                .any(|(name, value)| name == "Authorization" && *value == expected);
            if !authorized {
                return Ok(RawResponse::new(
                    401,
                    r#"{"basarili": false, "mesaj": "Token geçersiz"}"#.as_bytes().to_vec(),
                ));
            }
            if request.path == "/auth/me" {
                // Suspended account: success status, failure envelope.
                return Ok(RawResponse::new(
                    200,
                    r#"{"basarili": false, "mesaj": "Hesap pasif durumda", "hata_kodu": "HESAP_PASIF"}"#
                        .as_bytes()
                        .to_vec(),
                ));
            }
            Ok(RawResponse::new(200, Self::ok_body()))
        }
    }

    fn client_with(backend: Arc<FakeBackend>) -> ApiClient {
        let tokens = TokenStore::new(
            Arc::new(MemoryTier::default()),
            Arc::new(MemoryTier::default()),
        );
        ApiClient::new(backend, tokens)
    }

    async fn seeded_client(backend: Arc<FakeBackend>, tier: StorageTier) -> ApiClient {
        let client = client_with(backend);
        client
            .tokens()
            .store(&CredentialPair::new("A-stale", "R1"), tier)
            .await
            .unwrap();
        client
    }

    #[tokio::test]
    async fn test_request_without_token_goes_unauthenticated() {
        let backend = Arc::new(FakeBackend::new("A1"));
        let client = client_with(Arc::clone(&backend));

        // No token stored: no refresh token either, so the 401 ends the
        // session without any refresh exchange.
        let result = client.dashboard_stats().await;
        assert!(matches!(result, Err(ApiError::SessionExpired(_))));
        assert_eq!(backend.refresh_count(), 0);
        assert_eq!(backend.authorization_headers()[0], None);
    }

    #[tokio::test]
    async fn test_expired_token_is_refreshed_and_replayed() {
        let backend = Arc::new(FakeBackend::new("A2"));
        let client = seeded_client(Arc::clone(&backend), StorageTier::Durable).await;

        let stats = client.dashboard_stats().await.unwrap();
        assert_eq!(stats.total_listings, 5);
        assert_eq!(backend.refresh_count(), 1);

        // Stale attempt, then the replay with the refreshed token.
        let auths = backend.authorization_headers();
        assert_eq!(auths[0].as_deref(), Some("Bearer A-stale"));
        assert_eq!(auths.last().unwrap().as_deref(), Some("Bearer A2"));
    }

    #[tokio::test]
    async fn test_refresh_persists_to_same_tier() {
        let backend = Arc::new(FakeBackend::new("A2"));
        let client = seeded_client(Arc::clone(&backend), StorageTier::Ephemeral).await;

        client.dashboard_stats().await.unwrap();

        let (pair, tier) = client.tokens().read().await.unwrap().unwrap();
        assert_eq!(tier, StorageTier::Ephemeral);
        assert_eq!(pair, CredentialPair::new("A2", "R2"));
    }

    #[tokio::test]
    async fn test_concurrent_401s_share_one_refresh() {
        let backend = Arc::new(FakeBackend::new("A2"));
        let client = seeded_client(Arc::clone(&backend), StorageTier::Durable).await;

        let (a, b, c) = tokio::join!(
            client.dashboard_stats(),
            client.dashboard_stats(),
            client.dashboard_stats(),
        );

        assert_eq!(backend.refresh_count(), 1);
        assert!(a.is_ok());
        assert!(b.is_ok());
        assert!(c.is_ok());
    }

    #[tokio::test]
    async fn test_replay_is_bounded_to_one_retry() {
        // Refresh succeeds but hands out a token the backend still
        // rejects: the second 401 must surface, with no second refresh.
        let backend = Arc::new(FakeBackend::with_useless_refresh("A-never"));
        let client = seeded_client(Arc::clone(&backend), StorageTier::Durable).await;

        let result = client.dashboard_stats().await;
        match result {
            Err(ApiError::Api { status, message, .. }) => {
                assert_eq!(status, 401);
                assert_eq!(message, "Token geçersiz");
            }
            other => panic!("expected surfaced 401, got {other:?}"),
        }
        assert_eq!(backend.refresh_count(), 1);
    }

    #[tokio::test]
    async fn test_failed_refresh_expires_session() {
        let backend = Arc::new(FakeBackend::with_failing_refresh("A-never"));
        let client = seeded_client(Arc::clone(&backend), StorageTier::Durable).await;
        let mut events = client.subscribe_session_events();

        let result = client.dashboard_stats().await;
        assert!(matches!(result, Err(ApiError::SessionExpired(_))));
        assert!(client.tokens().read().await.unwrap().is_none());
        assert_eq!(events.try_recv().unwrap(), SessionEvent::Expired);
    }

    #[tokio::test]
    async fn test_login_then_refresh_scenario() {
        let backend = Arc::new(FakeBackend::new("A1"));
        let client = client_with(Arc::clone(&backend));

        let user = client.login("t@example.com", "secret", true).await.unwrap();
        assert_eq!(user.full_name, "Test");
        let (pair, tier) = client.tokens().read().await.unwrap().unwrap();
        assert_eq!(tier, StorageTier::Durable);
        assert_eq!(pair, CredentialPair::new("A1", "R1"));

        // Invalidate A1 server-side; the next call refreshes to A2.
        *backend.valid_token.lock().unwrap() = "A2".to_string();
        client.dashboard_stats().await.unwrap();

        let (pair, tier) = client.tokens().read().await.unwrap().unwrap();
        assert_eq!(tier, StorageTier::Durable);
        assert_eq!(pair, CredentialPair::new("A2", "R2"));
        assert_eq!(
            backend.authorization_headers().last().unwrap().as_deref(),
            Some("Bearer A2")
        );
    }

    #[tokio::test]
    async fn test_correlation_ids_are_unique_per_attempt() {
        let backend = Arc::new(FakeBackend::new("A2"));
        let client = seeded_client(Arc::clone(&backend), StorageTier::Durable).await;

        client.dashboard_stats().await.unwrap();
        client.dashboard_stats().await.unwrap();

        let ids = backend.correlation_ids();
        // Original attempt, refresh call, replay, then one more request.
        assert!(ids.len() >= 4);
        let unique: HashSet<_> = ids.iter().collect();
        assert_eq!(unique.len(), ids.len());
    }

    #[tokio::test]
    async fn test_error_message_extracted_from_envelope() {
        let backend = Arc::new(FakeBackend::with_useless_refresh("A-never"));
        let client = seeded_client(Arc::clone(&backend), StorageTier::Durable).await;

        let Err(ApiError::Api { message, .. }) = client.dashboard_stats().await else {
            panic!("expected API error");
        };
        assert_eq!(message, "Token geçersiz");
    }

    #[tokio::test]
    async fn test_success_status_with_failure_envelope_surfaces_message() {
        let backend = Arc::new(FakeBackend::new("A1"));
        let client = client_with(Arc::clone(&backend));
        client
            .tokens()
            .store(&CredentialPair::new("A1", "R1"), StorageTier::Durable)
            .await
            .unwrap();

        let error = client.current_user().await.unwrap_err();
        match error {
            ApiError::Api { status, message, code } => {
                assert_eq!(status, 200);
                assert_eq!(message, "Hesap pasif durumda");
                assert_eq!(code.as_deref(), Some("HESAP_PASIF"));
            }
            other => panic!("expected API error, got {other:?}"),
        }
        assert_eq!(backend.refresh_count(), 0);
    }

    #[test]
    fn test_query_pairs_renders_scalars() {
        #[derive(Serialize)]
        struct Query {
            sehir: String,
            sayfa: u32,
        }
        let pairs = ApiClient::query_pairs(&Query {
            sehir: "Ankara".to_string(),
            sayfa: 2,
        })
        .unwrap();
        assert!(pairs.contains(&("sehir".to_string(), "Ankara".to_string())));
        assert!(pairs.contains(&("sayfa".to_string(), "2".to_string())));
    }
}
