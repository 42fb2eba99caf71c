#![cfg(not(target_arch = "wasm32"))]

use portfolio_app::api::ApiClient;
use portfolio_app::gallery::{CardState, GalleryState, GalleryUnlock};
use portfolio_app::models::{ContentItem, GalleryCard};
use portfolio_app::storage::{gallery_token_key, CredentialStore, MemoryStore, ADMIN_TOKEN_KEY};
use std::sync::Arc;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn flow(server: &MockServer) -> (GalleryUnlock, Arc<MemoryStore>) {
    let store = MemoryStore::shared();
    let api = ApiClient::new(server.uri(), store.clone());
    (GalleryUnlock::new(api), store)
}

fn card(id: &str) -> GalleryCard {
    GalleryCard {
        id: id.to_string(),
        title: id.to_uppercase(),
        summary: String::new(),
        locked: true,
        cover: None,
    }
}

async fn mount_unlock(server: &MockServer, card_id: &str, password: &str, token: &str) {
    Mock::given(method("POST"))
        .and(path(format!("/api/gallery/{card_id}/unlock")))
        .and(body_json(serde_json::json!({ "password": password })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "token": token })))
        .mount(server)
        .await;
}

async fn mount_content(server: &MockServer, card_id: &str, token: &str, url: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/gallery/{card_id}/content")))
        .and(header("authorization", format!("Bearer {token}").as_str()))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [{ "type": "image", "url": url }]
        })))
        .mount(server)
        .await;
}

async fn mount_content_rejected(server: &MockServer, card_id: &str) {
    Mock::given(method("GET"))
        .and(path(format!("/api/gallery/{card_id}/content")))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({ "error": "Invalid token" })),
        )
        .with_priority(10)
        .mount(server)
        .await;
}

fn image(url: &str) -> ContentItem {
    ContentItem::Image {
        url: url.to_string(),
    }
}

#[tokio::test]
async fn test_unlock_stores_card_token_and_loads_content() {
    let server = MockServer::start().await;
    let (flow, store) = flow(&server);
    mount_unlock(&server, "a", "pw-a", "tok-a").await;
    mount_content(&server, "a", "tok-a", "https://cdn/a.jpg").await;

    let mut state = GalleryState::default();
    assert!(state.begin_unlock("a"));
    let result = flow.unlock("a", "pw-a").await;
    state.finish_unlock("a", result);

    assert_eq!(
        state.state("a"),
        CardState::Unlocked {
            items: vec![image("https://cdn/a.jpg")]
        }
    );
    assert_eq!(store.get(&gallery_token_key("a")).as_deref(), Some("tok-a"));
    assert_eq!(store.keys(), vec![gallery_token_key("a")]);
}

#[tokio::test]
async fn test_unlocking_one_card_never_opens_another() {
    let server = MockServer::start().await;
    let (flow, store) = flow(&server);
    mount_unlock(&server, "a", "pw-a", "tok-a").await;
    mount_content(&server, "a", "tok-a", "https://cdn/a.jpg").await;
    mount_content(&server, "b", "tok-b", "https://cdn/b.jpg").await;
    mount_content_rejected(&server, "b").await;

    flow.unlock("a", "pw-a").await.expect("card a should unlock");

    // Card b has no token of its own, so nothing is restored for it.
    assert!(flow.stored_token("b").is_none());
    assert!(flow.restore("b").await.is_none());

    // Even presenting a's token to b's content endpoint is refused.
    let api = ApiClient::new(server.uri(), store.clone());
    assert!(api.card_content("b", "tok-a").await.is_err());
}

#[tokio::test]
async fn test_content_request_carries_card_token_not_admin_token() {
    let server = MockServer::start().await;
    let (flow, store) = flow(&server);
    store.set(ADMIN_TOKEN_KEY, "admin-jwt");
    mount_unlock(&server, "a", "pw-a", "tok-a").await;
    mount_content(&server, "a", "tok-a", "https://cdn/a.jpg").await;

    flow.unlock("a", "pw-a").await.expect("card a should unlock");

    let requests = server.received_requests().await.expect("recording is on");
    let content_req = requests
        .iter()
        .find(|r| r.url.path() == "/api/gallery/a/content")
        .expect("content should be requested");
    assert_eq!(
        content_req
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok()),
        Some("Bearer tok-a")
    );
}

#[tokio::test]
async fn test_wrong_password_stays_locked_and_writes_nothing() {
    let server = MockServer::start().await;
    let (flow, store) = flow(&server);

    Mock::given(method("POST"))
        .and(path("/api/gallery/a/unlock"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(serde_json::json!({ "error": "Invalid password" })),
        )
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/gallery/a/content"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut state = GalleryState::default();
    state.begin_unlock("a");
    let result = flow.unlock("a", "wrong").await;
    state.finish_unlock("a", result);

    let card_state = state.state("a");
    assert!(card_state.is_locked());
    assert_eq!(card_state.error(), Some("Invalid password"));
    assert!(store.is_empty());
}

#[tokio::test]
async fn test_failed_content_fetch_discards_new_token() {
    let server = MockServer::start().await;
    let (flow, store) = flow(&server);
    mount_unlock(&server, "a", "pw-a", "tok-a").await;
    mount_content_rejected(&server, "a").await;

    assert!(flow.unlock("a", "pw-a").await.is_err());
    assert!(store.get(&gallery_token_key("a")).is_none());
}

#[tokio::test]
async fn test_reload_with_valid_token_restores_without_password() {
    let server = MockServer::start().await;
    let (flow, store) = flow(&server);
    store.set(&gallery_token_key("a"), "tok-a");
    mount_content(&server, "a", "tok-a", "https://cdn/a.jpg").await;

    Mock::given(method("POST"))
        .and(path("/api/gallery/a/unlock"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let mut state = GalleryState::default();
    let restored = flow
        .restore_all(&[card("a"), card("b")], |id, items| state.restore(id, items))
        .await;

    assert_eq!(restored, 1);

    assert_eq!(state.state("a").items(), &[image("https://cdn/a.jpg")]);
    assert!(state.state("b").is_locked());
}

#[tokio::test]
async fn test_reload_with_invalidated_token_fails_silently() {
    let server = MockServer::start().await;
    let (flow, store) = flow(&server);
    store.set(&gallery_token_key("a"), "stale");
    mount_content_rejected(&server, "a").await;

    let mut state = GalleryState::default();
    let restored = flow
        .restore_all(&[card("a")], |id, items| state.restore(id, items))
        .await;
    assert_eq!(restored, 0);

    assert_eq!(state.state("a"), CardState::Locked { error: None });
    // The stale token is left for the user to replace or re-lock.
    assert_eq!(store.get(&gallery_token_key("a")).as_deref(), Some("stale"));
}

#[tokio::test]
async fn test_relock_removes_token_and_content() {
    let server = MockServer::start().await;
    let (flow, store) = flow(&server);
    mount_unlock(&server, "a", "pw-a", "tok-a").await;
    mount_unlock(&server, "b", "pw-b", "tok-b").await;
    mount_content(&server, "a", "tok-a", "https://cdn/a.jpg").await;
    mount_content(&server, "b", "tok-b", "https://cdn/b.jpg").await;

    let mut state = GalleryState::default();
    for (id, pw) in [("a", "pw-a"), ("b", "pw-b")] {
        state.begin_unlock(id);
        let result = flow.unlock(id, pw).await;
        state.finish_unlock(id, result);
    }

    flow.relock("a");
    state.relock("a");

    assert!(state.state("a").is_locked());
    assert!(state.state("b").is_unlocked());
    assert!(store.get(&gallery_token_key("a")).is_none());
    assert_eq!(store.get(&gallery_token_key("b")).as_deref(), Some("tok-b"));
    assert!(flow.restore("a").await.is_none());
}

#[tokio::test]
async fn test_card_ids_are_percent_encoded_in_paths() {
    let server = MockServer::start().await;
    let (flow, store) = flow(&server);
    mount_unlock(&server, "summer%202024", "pw", "tok-s").await;
    mount_content(&server, "summer%202024", "tok-s", "https://cdn/s.jpg").await;

    let items = flow.unlock("summer 2024", "pw").await.expect("should unlock");
    assert_eq!(items, vec![image("https://cdn/s.jpg")]);
    assert_eq!(
        store.get(&gallery_token_key("summer 2024")).as_deref(),
        Some("tok-s")
    );
}
