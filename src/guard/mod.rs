use crate::storage::{CredentialStore, ADMIN_TOKEN_KEY};

pub const LOGIN_PATH: &str = "/login";

/// Outcome of guarding the admin view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Pass,
    Redirect(String),
}

/// Decides whether the admin view may render.
///
/// Only local presence of a non-empty token is checked; an expired token
/// passes and the first admin API call reports the failure. Callers evaluate
/// this on every render and never cache the result.
pub fn evaluate(store: &dyn CredentialStore) -> GuardDecision {
    match store.get(ADMIN_TOKEN_KEY) {
        Some(token) if !token.is_empty() => GuardDecision::Pass,
        _ => GuardDecision::Redirect(LOGIN_PATH.to_string()),
    }
}
