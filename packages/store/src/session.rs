//! # Session store: the authenticated user and bearer token
//!
//! [`SessionStore`] holds the single active [`Session`] for the running app and
//! mirrors its token into a [`TokenStorage`] backend. It is an explicit context
//! object: the app constructs one at startup and hands clones to every page
//! controller. Clones share state, so a login performed through one clone is
//! visible through all of them.
//!
//! ## Lifecycle
//!
//! - Starts with no session.
//! - [`login`](SessionStore::login) replaces the session wholesale and writes the token.
//! - [`logout`](SessionStore::logout) clears both. Calling it twice is harmless.
//!
//! A token left in storage by a previous run is **not** turned back into a
//! session on startup; the user logs in again. The leftover value is still
//! visible through [`stored_token`](SessionStore::stored_token).

use std::sync::{Arc, Mutex, MutexGuard};

use crate::models::UserInfo;
use crate::storage::TokenStorage;

/// Key the token is stored under.
pub const TOKEN_KEY: &str = "token";

/// The authenticated identity plus its bearer token.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    pub user_id: String,
    pub email: String,
    pub username: String,
    pub token: String,
}

impl Session {
    /// Merge a token into the identity returned by the login endpoint.
    pub fn new(user: UserInfo, token: impl Into<String>) -> Self {
        Self {
            user_id: user.id,
            email: user.email,
            username: user.username,
            token: token.into(),
        }
    }
}

/// Shared handle to the current session and its durable token slot.
#[derive(Clone)]
pub struct SessionStore {
    current: Arc<Mutex<Option<Session>>>,
    storage: Arc<dyn TokenStorage + Send + Sync>,
    key: Arc<str>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionStore")
            .field("authenticated", &self.is_authenticated())
            .field("key", &self.key)
            .finish()
    }
}

impl PartialEq for SessionStore {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.current, &other.current)
    }
}

impl SessionStore {
    /// Create a store with no session, persisting under [`TOKEN_KEY`].
    pub fn new(storage: impl TokenStorage + Send + Sync + 'static) -> Self {
        Self::with_key(storage, TOKEN_KEY)
    }

    /// Create a store that persists the token under a custom key.
    pub fn with_key(storage: impl TokenStorage + Send + Sync + 'static, key: &str) -> Self {
        Self {
            current: Arc::new(Mutex::new(None)),
            storage: Arc::new(storage),
            key: Arc::from(key),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Option<Session>> {
        // Poisoning cannot leave a half-written Option behind.
        self.current.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Replace the current session with `user` + `token` and persist the token.
    pub fn login(&self, user: UserInfo, token: &str) {
        let session = Session::new(user, token);
        tracing::info!(user_id = %session.user_id, "session started");
        *self.lock() = Some(session);
        self.storage.save(&self.key, token);
    }

    /// Drop the current session and its stored token.
    pub fn logout(&self) {
        if self.lock().take().is_some() {
            tracing::info!("session ended");
        }
        self.storage.remove(&self.key);
    }

    /// Snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.lock().clone()
    }

    /// Bearer token of the current session.
    pub fn token(&self) -> Option<String> {
        self.lock().as_ref().map(|s| s.token.clone())
    }

    pub fn is_authenticated(&self) -> bool {
        self.lock().is_some()
    }

    /// Token currently in durable storage, regardless of the in-memory session.
    pub fn stored_token(&self) -> Option<String> {
        self.storage.load(&self.key)
    }
}
