use crate::models::{ContactMessage, ContentItem, GalleryCard};
use crate::storage::{SharedStore, ADMIN_TOKEN_KEY};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use thiserror::Error;

const GENERIC_FAILURE: &str = "Request failed";

/// Errors surfaced by backend calls.
#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum ApiError {
    /// Missing or rejected bearer token (401/403).
    #[error("{0}")]
    Unauthorized(String),

    /// Any other non-success status, e.g. a wrong gallery password.
    #[error("{message}")]
    Rejected { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// Success status, but the body did not decode.
    #[error("Invalid response: {0}")]
    Parse(String),
}

impl ApiError {
    fn network(e: reqwest::Error) -> Self {
        Self::Network(e.to_string())
    }

    fn parse(e: impl std::fmt::Display) -> Self {
        Self::Parse(e.to_string())
    }

    fn from_status(status: StatusCode, body: &str) -> Self {
        let message = error_message(status, body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Self::Unauthorized(message),
            _ => Self::Rejected {
                status: status.as_u16(),
                message,
            },
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized(_))
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Human-readable message for a failed response: the body's `error` field
/// when present, else a status-derived fallback.
pub(crate) fn error_message(status: StatusCode, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
        .filter(|s| !s.trim().is_empty())
        .unwrap_or_else(|| format!("{GENERIC_FAILURE} ({})", status.as_u16()))
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct EnvConfig {
    pub api_url: String,
}

impl EnvConfig {
    pub fn new() -> Self {
        let default_api_url = "http://localhost:8080".to_string();

        let Some(window) = web_sys::window() else {
            return Self {
                api_url: default_api_url,
            };
        };

        // `window.ENV.API_URL` is what index.html injects; `api_url` is accepted too.
        if let Some(env) = window.get("ENV") {
            if !env.is_undefined() && env.is_object() {
                for key in ["API_URL", "api_url"] {
                    if let Ok(api_url) = js_sys::Reflect::get(&env, &key.into()) {
                        if let Some(url_str) = api_url.as_string() {
                            return Self { api_url: url_str };
                        }
                    }
                }
            }
        }

        // Same-origin deployments serve `/api/...` next to the app.
        match window.location().origin() {
            Ok(origin) if !origin.is_empty() && origin != "null" => Self { api_url: origin },
            _ => Self {
                api_url: default_api_url,
            },
        }
    }
}

impl Default for EnvConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UnlockRequest {
    pub password: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct MessagesResponse {
    #[serde(default)]
    pub messages: Vec<ContactMessage>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct CardsResponse {
    #[serde(default)]
    pub cards: Vec<GalleryCard>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
pub struct ContentResponse {
    #[serde(default)]
    pub items: Vec<ContentItem>,
}

/// Which bearer token a request carries.
#[derive(Clone, Copy, Debug)]
pub(crate) enum Auth<'a> {
    /// The admin token from the credential store, when one is stored.
    Session,
    /// A token supplied by the caller; the admin token is never attached.
    Card(&'a str),
}

#[derive(Clone)]
pub struct ApiClient {
    pub(crate) base_url: String,
    store: SharedStore,
}

impl ApiClient {
    pub fn new(base_url: impl Into<String>, store: SharedStore) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, store }
    }

    pub fn from_env(store: SharedStore) -> Self {
        Self::new(EnvConfig::new().api_url, store)
    }

    pub fn store(&self) -> &SharedStore {
        &self.store
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer(&self, auth: Auth<'_>) -> Option<String> {
        match auth {
            Auth::Session => self
                .store
                .get(ADMIN_TOKEN_KEY)
                .filter(|t| !t.is_empty())
                .map(|t| format!("Bearer {t}")),
            Auth::Card(token) => Some(format!("Bearer {token}")),
        }
    }

    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        auth: Auth<'_>,
    ) -> ApiResult<reqwest::Response> {
        let client = reqwest::Client::new();
        let mut req = client
            .request(method.clone(), self.url(path))
            .header(CONTENT_TYPE, "application/json");
        if let Some(header) = self.bearer(auth) {
            req = req.header(AUTHORIZATION, header);
        }
        if let Some(b) = body {
            req = req.json(&b);
        }

        let res = req.send().await.map_err(|e| {
            log::warn!("{method} {path} failed: {e}");
            ApiError::network(e)
        })?;

        if res.status().is_success() {
            Ok(res)
        } else {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            log::warn!("{method} {path} returned {status}");
            Err(ApiError::from_status(status, &text))
        }
    }

    pub(crate) async fn request<T: DeserializeOwned>(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        auth: Auth<'_>,
    ) -> ApiResult<T> {
        let res = self.send(method, path, body, auth).await?;
        res.json().await.map_err(ApiError::parse)
    }

    /// Like `request`, for endpoints whose success body is irrelevant
    /// (possibly empty, as with 204).
    pub(crate) async fn request_empty(
        &self,
        method: Method,
        path: &str,
        body: Option<serde_json::Value>,
        auth: Auth<'_>,
    ) -> ApiResult<()> {
        self.send(method, path, body, auth).await.map(|_| ())
    }

    fn to_body(value: &impl Serialize) -> ApiResult<serde_json::Value> {
        serde_json::to_value(value).map_err(ApiError::parse)
    }

    /// Exchanges admin credentials for a session token. Does not store it.
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<String> {
        let body = Self::to_body(&LoginRequest {
            username: username.to_string(),
            password: password.to_string(),
        })?;
        let res: TokenResponse = self
            .request(Method::POST, "/api/auth/login", Some(body), Auth::Session)
            .await?;
        Ok(res.token)
    }

    pub async fn list_messages(&self) -> ApiResult<Vec<ContactMessage>> {
        let res: MessagesResponse = self
            .request(Method::GET, "/api/messages", None, Auth::Session)
            .await?;
        Ok(res.messages)
    }

    pub async fn delete_message(&self, id: i64) -> ApiResult<()> {
        self.request_empty(
            Method::DELETE,
            &format!("/api/messages/{id}"),
            None,
            Auth::Session,
        )
        .await
    }

    pub async fn submit_contact(&self, req: &ContactRequest) -> ApiResult<()> {
        let body = Self::to_body(req)?;
        self.request_empty(Method::POST, "/api/contact", Some(body), Auth::Session)
            .await
    }

    pub async fn list_gallery(&self) -> ApiResult<Vec<GalleryCard>> {
        let res: CardsResponse = self
            .request(Method::GET, "/api/gallery", None, Auth::Session)
            .await?;
        Ok(res.cards)
    }

    /// Submits a card password and returns the card-scoped token.
    pub async fn unlock_card(&self, card_id: &str, password: &str) -> ApiResult<String> {
        let body = Self::to_body(&UnlockRequest {
            password: password.to_string(),
        })?;
        let res: TokenResponse = self
            .request(
                Method::POST,
                &format!("/api/gallery/{}/unlock", urlencoding::encode(card_id)),
                Some(body),
                Auth::Session,
            )
            .await?;
        Ok(res.token)
    }

    pub async fn card_content(&self, card_id: &str, token: &str) -> ApiResult<Vec<ContentItem>> {
        let res: ContentResponse = self
            .request(
                Method::GET,
                &format!("/api/gallery/{}/content", urlencoding::encode(card_id)),
                None,
                Auth::Card(token),
            )
            .await?;
        Ok(res.items)
    }
}
