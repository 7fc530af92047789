//! # Token storage: durable key/value slot for the bearer token
//!
//! The client persists exactly one piece of state across page loads: the
//! bearer token handed out by `/auth/login`. [`TokenStorage`] abstracts where
//! that string lives so the same [`crate::SessionStore`] logic runs against
//! browser `localStorage`, a file in the platform data directory, or an
//! in-memory map in tests.
//!
//! | Implementation | Platform |
//! |----------------|----------|
//! | [`crate::MemoryTokenStorage`] | tests, fallback |
//! | [`crate::FileTokenStorage`] | desktop (native) |
//! | `LocalTokenStorage` | web (WASM + `web` feature) |
//!
//! Backends never surface I/O failures to the caller. A write that fails is
//! logged and dropped, a read that fails behaves like a missing key.

/// Synchronous key/value storage for small strings.
pub trait TokenStorage {
    /// Read the value stored under `key`, if any.
    fn load(&self, key: &str) -> Option<String>;

    /// Store `value` under `key`, replacing any previous value.
    fn save(&self, key: &str, value: &str);

    /// Remove `key`. Removing a missing key is a no-op.
    fn remove(&self, key: &str);
}
