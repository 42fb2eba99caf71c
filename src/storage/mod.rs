use std::collections::HashMap;
use std::sync::{Arc, Mutex, PoisonError};

/// Durable key for the admin session token.
pub const ADMIN_TOKEN_KEY: &str = "admin.token";

const GALLERY_TOKEN_PREFIX: &str = "gallery.token.";

/// Storage key holding the unlock token for one gallery card.
///
/// The prefix keeps card keys apart from the admin key, and the card id is
/// embedded verbatim so two distinct ids never map to the same key.
pub fn gallery_token_key(card_id: &str) -> String {
    format!("{GALLERY_TOKEN_PREFIX}{card_id}")
}

/// Key-value capability holding every token the app knows about.
///
/// Nothing else in the crate writes tokens; sessions, guards and the gallery
/// flow all go through an injected store.
pub trait CredentialStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, token: &str);
    fn remove(&self, key: &str);
}

pub type SharedStore = Arc<dyn CredentialStore>;

/// Browser `localStorage`. Durable across reloads within one profile.
///
/// Failures (private mode, quota, no window) are logged and otherwise behave
/// like an absent key.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStore;

impl LocalStore {
    pub fn shared() -> SharedStore {
        Arc::new(Self)
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }
}

impl CredentialStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok().flatten()
    }

    fn set(&self, key: &str, token: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, token).is_err() {
                    log::warn!("localStorage rejected write for {key}");
                }
            }
            None => log::warn!("localStorage unavailable; {key} not persisted"),
        }
    }

    fn remove(&self, key: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.remove_item(key).is_err() {
                    log::warn!("localStorage rejected removal of {key}");
                }
            }
            None => log::warn!("localStorage unavailable; {key} not removed"),
        }
    }
}

/// In-process store, used by native tests and anywhere a browser is absent.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn shared() -> Arc<Self> {
        Arc::new(Self::new())
    }

    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        keys.sort();
        keys
    }
}

impl CredentialStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, token: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), token.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}
