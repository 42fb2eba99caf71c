use crate::api::{ApiClient, ApiResult};
use crate::models::{ContentItem, GalleryCard};
use crate::storage::gallery_token_key;
use std::collections::{HashMap, HashSet};

/// Where one card sits in the unlock flow.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CardState {
    /// No content loaded. `error` is the inline message from the last
    /// failed attempt, if any.
    Locked { error: Option<String> },
    Unlocking,
    Unlocked { items: Vec<ContentItem> },
}

impl Default for CardState {
    fn default() -> Self {
        Self::Locked { error: None }
    }
}

impl CardState {
    pub fn is_locked(&self) -> bool {
        matches!(self, Self::Locked { .. })
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self, Self::Unlocked { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Locked { error } => error.as_deref(),
            _ => None,
        }
    }

    pub fn items(&self) -> &[ContentItem] {
        match self {
            Self::Unlocked { items } => items,
            _ => &[],
        }
    }
}

/// Per-card states, keyed by card id. Cards never seen are Locked.
///
/// Cards the user has unlocked or re-locked since load are marked touched;
/// silent restores no longer apply to them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GalleryState {
    cards: HashMap<String, CardState>,
    touched: HashSet<String>,
}

impl GalleryState {
    pub fn state(&self, card_id: &str) -> CardState {
        self.cards.get(card_id).cloned().unwrap_or_default()
    }

    /// Locked -> Unlocking. Returns false (and changes nothing) when the card
    /// is already unlocking or unlocked.
    pub fn begin_unlock(&mut self, card_id: &str) -> bool {
        if !self.state(card_id).is_locked() {
            return false;
        }
        self.touched.insert(card_id.to_string());
        self.cards.insert(card_id.to_string(), CardState::Unlocking);
        true
    }

    pub fn finish_unlock(&mut self, card_id: &str, result: ApiResult<Vec<ContentItem>>) {
        let next = match result {
            Ok(items) => CardState::Unlocked { items },
            Err(e) => CardState::Locked {
                error: Some(e.to_string()),
            },
        };
        self.cards.insert(card_id.to_string(), next);
    }

    /// Inline error for a Locked card (e.g. blank password), no request made.
    pub fn reject(&mut self, card_id: &str, message: impl Into<String>) {
        if self.state(card_id).is_locked() {
            self.cards.insert(
                card_id.to_string(),
                CardState::Locked {
                    error: Some(message.into()),
                },
            );
        }
    }

    /// Applies content fetched with a stored token. Ignored unless the card
    /// is still Locked and untouched, so a late result never overrides an
    /// unlock or re-lock made in the meantime.
    pub fn restore(&mut self, card_id: &str, items: Vec<ContentItem>) {
        if !self.touched.contains(card_id) && self.state(card_id).is_locked() {
            self.cards
                .insert(card_id.to_string(), CardState::Unlocked { items });
        }
    }

    pub fn relock(&mut self, card_id: &str) {
        self.touched.insert(card_id.to_string());
        self.cards.remove(card_id);
    }
}

/// Network side of the unlock flow. Card tokens are always passed
/// explicitly and stored under the card's own key.
#[derive(Clone)]
pub struct GalleryUnlock {
    api: ApiClient,
}

impl GalleryUnlock {
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    pub fn stored_token(&self, card_id: &str) -> Option<String> {
        self.api
            .store()
            .get(&gallery_token_key(card_id))
            .filter(|t| !t.is_empty())
    }

    pub async fn cards(&self) -> ApiResult<Vec<GalleryCard>> {
        self.api.list_gallery().await
    }

    /// Submits the password, stores the returned token, then fetches content
    /// with it. A rejected password writes nothing. If the content fetch
    /// fails the fresh token is dropped again so the card stays Locked.
    pub async fn unlock(&self, card_id: &str, password: &str) -> ApiResult<Vec<ContentItem>> {
        let token = self.api.unlock_card(card_id, password).await?;
        let key = gallery_token_key(card_id);
        self.api.store().set(&key, &token);

        match self.api.card_content(card_id, &token).await {
            Ok(items) => Ok(items),
            Err(e) => {
                self.api.store().remove(&key);
                Err(e)
            }
        }
    }

    /// Silent re-fetch with a previously stored token. Failures are
    /// swallowed; a stale token stays stored until the card is re-locked.
    pub async fn restore(&self, card_id: &str) -> Option<Vec<ContentItem>> {
        let token = self.stored_token(card_id)?;
        match self.api.card_content(card_id, &token).await {
            Ok(items) => Some(items),
            Err(e) => {
                log::debug!("silent restore of gallery card {card_id} failed: {e}");
                None
            }
        }
    }

    /// Restores every card holding a stored token, one after another.
    /// `apply` runs as soon as each card's content arrives. Returns how many
    /// cards were restored.
    pub async fn restore_all(
        &self,
        cards: &[GalleryCard],
        mut apply: impl FnMut(&str, Vec<ContentItem>),
    ) -> usize {
        let mut restored = 0;
        for card in cards {
            if let Some(items) = self.restore(&card.id).await {
                apply(&card.id, items);
                restored += 1;
            }
        }
        restored
    }

    pub fn relock(&self, card_id: &str) {
        self.api.store().remove(&gallery_token_key(card_id));
    }
}
