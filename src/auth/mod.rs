use crate::storage::{SharedStore, ADMIN_TOKEN_KEY};
use leptos::prelude::*;
use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("AuthSession used outside provider")]
    OutsideProvider,
}

/// Page-lifetime admin session.
///
/// `is_authenticated` mirrors whether the store holds an admin token; the
/// store stays the owner of the token itself.
#[derive(Clone)]
pub struct AuthSession {
    is_authenticated: ArcRwSignal<bool>,
    store: SharedStore,
}

impl AuthSession {
    /// Reads the admin token once; later changes go through `login`/`logout`.
    pub fn new(store: SharedStore) -> Self {
        let present = store
            .get(ADMIN_TOKEN_KEY)
            .is_some_and(|t| !t.is_empty());
        Self {
            is_authenticated: ArcRwSignal::new(present),
            store,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated.get()
    }

    /// Stores a token obtained from `/api/auth/login`. No network call.
    pub fn login(&self, token: &str) {
        self.store.set(ADMIN_TOKEN_KEY, token);
        self.is_authenticated.set(true);
        log::info!("admin session started");
    }

    pub fn logout(&self) {
        self.store.remove(ADMIN_TOKEN_KEY);
        self.is_authenticated.set(false);
        log::info!("admin session ended");
    }
}

pub fn provide_auth(session: AuthSession) {
    provide_context(session);
}

/// The session provided by an ancestor, or `OutsideProvider` when the caller
/// is not wired under `provide_auth`.
pub fn use_auth() -> Result<AuthSession, SessionError> {
    use_context::<AuthSession>().ok_or(SessionError::OutsideProvider)
}
