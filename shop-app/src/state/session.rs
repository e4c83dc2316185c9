//! Session store: the signed-in shopper's token and profile.
//!
//! Reads durable storage once at boot and writes back on every mutation,
//! so reopening the app resumes the same session without a network round
//! trip. Storage failures are swallowed and read as "no session": browsing
//! still works logged out, so the app fails open to the public catalog.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

use crate::net::types::ShopUser;
use crate::util::storage::Storage;

/// Durable storage key for the bearer token.
pub const TOKEN_KEY: &str = "joyrent-token";
/// Durable storage key for the serialized shopper profile.
pub const USER_KEY: &str = "joyrent-user";

#[derive(Default)]
struct SessionState {
    token: String,
    user: Option<ShopUser>,
}

/// Holds the current session. Only the login flows and the HTTP client's
/// 401 handler mutate it; everything else reads through it.
pub struct SessionStore {
    storage: Arc<dyn Storage>,
    state: Mutex<SessionState>,
}

impl SessionStore {
    /// Boot-time construction from durable storage.
    ///
    /// A stored profile that no longer parses is dropped (and its key
    /// removed) rather than surfaced as an error.
    pub fn load(storage: Arc<dyn Storage>) -> Self {
        let token = storage.get(TOKEN_KEY).unwrap_or_default();
        let user = storage
            .get(USER_KEY)
            .and_then(|raw| match serde_json::from_str(&raw) {
                Ok(user) => Some(user),
                Err(_) => {
                    storage.remove(USER_KEY);
                    None
                }
            });
        Self {
            storage,
            state: Mutex::new(SessionState { token, user }),
        }
    }

    /// Current bearer token, `None` when logged out. The token is never
    /// present-but-empty.
    pub fn token(&self) -> Option<String> {
        self.state.lock().ok().and_then(|state| {
            if state.token.is_empty() {
                None
            } else {
                Some(state.token.clone())
            }
        })
    }

    /// Current shopper profile, if any.
    pub fn user(&self) -> Option<ShopUser> {
        self.state.lock().ok().and_then(|state| state.user.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.token().is_some()
    }

    /// Replace the whole session after a successful login and persist it.
    /// An empty token is stored as "logged out" rather than as `""`.
    pub fn set_session(&self, user: ShopUser, token: &str) {
        if let Ok(mut state) = self.state.lock() {
            state.token = token.to_owned();
            state.user = Some(user.clone());
        }

        if token.is_empty() {
            self.storage.remove(TOKEN_KEY);
        } else {
            self.storage.set(TOKEN_KEY, token);
        }
        match serde_json::to_string(&user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(_) => self.storage.remove(USER_KEY),
        }
    }

    /// Update just the profile, keeping the token. Used after the profile
    /// edit screen saves.
    pub fn set_user(&self, user: ShopUser) {
        if let Ok(mut state) = self.state.lock() {
            state.user = Some(user.clone());
        }
        match serde_json::to_string(&user) {
            Ok(raw) => self.storage.set(USER_KEY, &raw),
            Err(_) => self.storage.remove(USER_KEY),
        }
    }

    /// Drop the session and its persisted records.
    pub fn clear(&self) {
        if let Ok(mut state) = self.state.lock() {
            state.token.clear();
            state.user = None;
        }
        self.storage.remove(TOKEN_KEY);
        self.storage.remove(USER_KEY);
    }
}
