#![cfg(not(target_arch = "wasm32"))]

use portfolio_app::api::{ApiClient, ApiError};
use portfolio_app::auth::AuthSession;
use portfolio_app::guard::{evaluate, GuardDecision};
use portfolio_app::storage::{CredentialStore, MemoryStore, ADMIN_TOKEN_KEY};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client(server: &MockServer) -> (ApiClient, Arc<MemoryStore>) {
    let store = MemoryStore::shared();
    (ApiClient::new(server.uri(), store.clone()), store)
}

#[tokio::test]
async fn test_attaches_admin_bearer_when_stored() {
    let server = MockServer::start().await;
    let (api, store) = client(&server);
    store.set(ADMIN_TOKEN_KEY, "admin-jwt");

    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .and(header("authorization", "Bearer admin-jwt"))
        .and(header("content-type", "application/json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "cards": [{"id": "travel", "title": "Travel", "summary": "Trips", "locked": true}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let cards = api.list_gallery().await.expect("cards should load");
    assert_eq!(cards.len(), 1);
    assert_eq!(cards[0].id, "travel");
}

#[tokio::test]
async fn test_no_authorization_header_without_token() {
    let server = MockServer::start().await;
    let (api, _store) = client(&server);

    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"cards": []})))
        .mount(&server)
        .await;

    assert!(api.list_gallery().await.expect("should load").is_empty());

    let requests = server.received_requests().await.expect("recording is on");
    assert_eq!(requests.len(), 1);
    assert!(requests[0].headers.get("authorization").is_none());
}

#[tokio::test]
async fn test_error_field_becomes_message() {
    let server = MockServer::start().await;
    let (api, _store) = client(&server);

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(serde_json::json!({"username": "admin", "password": "bad"})))
        .respond_with(
            ResponseTemplate::new(401)
                .set_body_json(serde_json::json!({"error": "Invalid credentials"})),
        )
        .mount(&server)
        .await;

    let err = api.login("admin", "bad").await.expect_err("login should fail");
    assert_eq!(err, ApiError::Unauthorized("Invalid credentials".to_string()));
    assert_eq!(err.to_string(), "Invalid credentials");
}

#[tokio::test]
async fn test_non_json_error_body_uses_generic_message() {
    let server = MockServer::start().await;
    let (api, _store) = client(&server);

    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&server)
        .await;

    let err = api.list_gallery().await.expect_err("should fail");
    assert_eq!(
        err,
        ApiError::Rejected {
            status: 502,
            message: "Request failed (502)".to_string()
        }
    );
}

#[tokio::test]
async fn test_success_with_bad_body_is_parse_error() {
    let server = MockServer::start().await;
    let (api, _store) = client(&server);

    Mock::given(method("GET"))
        .and(path("/api/gallery"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let err = api.list_gallery().await.expect_err("should fail");
    assert!(matches!(err, ApiError::Parse(_)));
}

#[tokio::test]
async fn test_transport_failure_is_network_error() {
    // Nothing listens on the discard port.
    let api = ApiClient::new("http://127.0.0.1:9", MemoryStore::shared());
    let err = api.list_gallery().await.expect_err("should fail");
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn test_login_then_logout_drives_guard() {
    let server = MockServer::start().await;
    let (api, store) = client(&server);
    let session = AuthSession::new(store.clone());

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"token": "admin-jwt"})))
        .mount(&server)
        .await;

    assert_eq!(evaluate(&*store), GuardDecision::Redirect("/login".to_string()));

    let token = api.login("admin", "pw").await.expect("login should succeed");
    session.login(&token);
    assert!(session.is_authenticated());
    assert_eq!(evaluate(&*store), GuardDecision::Pass);

    session.logout();
    assert!(store.get(ADMIN_TOKEN_KEY).is_none());
    assert_eq!(evaluate(&*store), GuardDecision::Redirect("/login".to_string()));
}
