//! # Browser `localStorage` token storage
//!
//! [`LocalTokenStorage`] is the [`TokenStorage`] used on the **web platform**.
//! It reads and writes `window.localStorage` directly.
//!
//! `LocalTokenStorage` is a zero-size struct that looks up the `Storage` handle
//! on every call. `web_sys::Storage` is not `Send`, and the lookup is cheap.
//! When storage is unavailable (private browsing, sandboxed iframe) reads
//! return `None` and writes are dropped with a warning.

use crate::storage::TokenStorage;

/// `window.localStorage`-backed TokenStorage for the web platform.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalTokenStorage;

impl LocalTokenStorage {
    pub fn new() -> Self {
        Self
    }

    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }
}

impl TokenStorage for LocalTokenStorage {
    fn load(&self, key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    fn save(&self, key: &str, value: &str) {
        let Some(storage) = Self::storage() else {
            tracing::warn!("localStorage unavailable, {key} not saved");
            return;
        };
        if storage.set_item(key, value).is_err() {
            tracing::warn!("Failed to write {key} to localStorage");
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            let _ = storage.remove_item(key);
        }
    }
}
