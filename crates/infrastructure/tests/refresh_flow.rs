//! End-to-end tests of the assembled client against a mock HTTP server:
//! login persistence, transparent token refresh and session expiry.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::collections::HashSet;

use emlak_application::{ApiClient, ApiError, CredentialStorage, SessionEvent};
use emlak_domain::{CorrelationId, CredentialPair, StorageTier};
use emlak_infrastructure::{build_client, ClientConfig, FileCredentialStorage};
use tempfile::TempDir;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

struct Harness {
    server: MockServer,
    client: ApiClient,
    _dir: TempDir,
    credentials_path: std::path::PathBuf,
}

async fn harness() -> Harness {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let credentials_path = dir.path().join("credentials.json");
    let config = ClientConfig::new(format!("{}/api/v1", server.uri()), &credentials_path)
        .with_timeout_ms(5_000);
    let client = build_client(&config).unwrap();
    Harness {
        server,
        client,
        _dir: dir,
        credentials_path,
    }
}

fn stats_body() -> serde_json::Value {
    serde_json::json!({
        "basarili": true,
        "veri": {"toplam_ilan": 12, "bugun_arama": 3, "favori_sayisi": 4}
    })
}

/// Serves `/dashboard/stats` only for the given bearer token; everything
/// else gets a 401 envelope.
async fn mount_stats_requiring(server: &MockServer, token: &str) {
    Mock::given(method("GET"))
        .and(path("/api/v1/dashboard/stats"))
        .and(header("Authorization", format!("Bearer {token}")))
        .respond_with(ResponseTemplate::new(200).set_body_json(stats_body()))
        .mount(server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/v1/dashboard/stats"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "basarili": false, "mesaj": "Token geçersiz"
        })))
        .mount(server)
        .await;
}

#[tokio::test]
async fn test_login_with_remember_persists_to_file() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .and(body_json(serde_json::json!({
            "email": "ayse@example.com", "password": "parola"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "A1",
            "refresh_token": "R1",
            "kullanici": {
                "id": 7, "ad_soyad": "Ayşe Demir",
                "email": "ayse@example.com", "rol": "profesyonel"
            }
        })))
        .mount(&h.server)
        .await;

    let user = h.client.login("ayse@example.com", "parola", true).await.unwrap();
    assert_eq!(user.full_name, "Ayşe Demir");

    let durable = FileCredentialStorage::new(&h.credentials_path);
    assert_eq!(
        durable.load().await.unwrap(),
        Some(CredentialPair::new("A1", "R1"))
    );
}

#[tokio::test]
async fn test_login_without_remember_leaves_no_file() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "A1",
            "refresh_token": "R1",
            "kullanici": {
                "id": 7, "ad_soyad": "Ayşe Demir",
                "email": "ayse@example.com", "rol": "profesyonel"
            }
        })))
        .mount(&h.server)
        .await;

    h.client.login("ayse@example.com", "parola", false).await.unwrap();

    assert!(!h.credentials_path.exists());
    let (_, tier) = h.client.tokens().read().await.unwrap().unwrap();
    assert_eq!(tier, StorageTier::Ephemeral);
}

#[tokio::test]
async fn test_rejected_login_surfaces_backend_message() {
    let h = harness().await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "basarili": false, "mesaj": "E-posta veya şifre hatalı"
        })))
        .mount(&h.server)
        .await;

    let error = h.client.login("ayse@example.com", "yanlis", true).await.unwrap_err();
    match error {
        ApiError::Api { status, message, .. } => {
            assert_eq!(status, 401);
            assert_eq!(message, "E-posta veya şifre hatalı");
        }
        other => panic!("expected API error, got {other:?}"),
    }
    assert!(h.client.tokens().read().await.unwrap().is_none());
}

#[tokio::test]
async fn test_expired_token_is_refreshed_and_persisted() {
    let h = harness().await;
    mount_stats_requiring(&h.server, "A2").await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh"))
        .and(body_json(serde_json::json!({"refresh": "R1"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "A2", "refresh_token": "R2"
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    h.client
        .tokens()
        .store(&CredentialPair::new("A1-stale", "R1"), StorageTier::Durable)
        .await
        .unwrap();

    let stats = h.client.dashboard_stats().await.unwrap();
    assert_eq!(stats.total_listings, 12);

    // The rotated pair lands in the same tier the stale one came from.
    let durable = FileCredentialStorage::new(&h.credentials_path);
    assert_eq!(
        durable.load().await.unwrap(),
        Some(CredentialPair::new("A2", "R2"))
    );
}

#[tokio::test]
async fn test_failed_refresh_clears_tokens_and_emits_expired() {
    let h = harness().await;
    mount_stats_requiring(&h.server, "A-none").await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "basarili": false, "mesaj": "Oturum geçersiz"
        })))
        .expect(1)
        .mount(&h.server)
        .await;

    h.client
        .tokens()
        .store(&CredentialPair::new("A1", "R1"), StorageTier::Durable)
        .await
        .unwrap();
    let mut events = h.client.subscribe_session_events();

    let result = h.client.dashboard_stats().await;
    assert!(matches!(result, Err(ApiError::SessionExpired(_))));
    assert!(h.client.tokens().read().await.unwrap().is_none());
    assert!(!h.credentials_path.exists());
    assert_eq!(events.try_recv().unwrap(), SessionEvent::Expired);
}

#[tokio::test]
async fn test_every_request_carries_a_unique_correlation_id() {
    let h = harness().await;
    mount_stats_requiring(&h.server, "A2").await;
    Mock::given(method("POST"))
        .and(path("/api/v1/auth/refresh"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "access_token": "A2", "refresh_token": "R2"
        })))
        .mount(&h.server)
        .await;

    h.client
        .tokens()
        .store(&CredentialPair::new("A1-stale", "R1"), StorageTier::Durable)
        .await
        .unwrap();
    h.client.dashboard_stats().await.unwrap();

    let requests = h.server.received_requests().await.unwrap();
    // Stale attempt, refresh exchange, replay.
    assert_eq!(requests.len(), 3);
    let ids: Vec<String> = requests
        .iter()
        .map(|r| {
            r.headers
                .get(CorrelationId::HEADER)
                .expect("correlation header missing")
                .to_str()
                .unwrap()
                .to_string()
        })
        .collect();
    let unique: HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());

    for request in &requests {
        let language = request.headers.get("Accept-Language").unwrap();
        assert_eq!(language.to_str().unwrap(), "tr");
    }
}
