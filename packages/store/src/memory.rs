use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::storage::TokenStorage;

/// In-memory TokenStorage for testing and as a fallback when no durable
/// storage is available.
#[derive(Clone, Debug, Default)]
pub struct MemoryTokenStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryTokenStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.entries.lock().map(|e| e.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl TokenStorage for MemoryTokenStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    fn save(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }

    fn remove(&self, key: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.remove(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_remove() {
        let storage = MemoryTokenStorage::new();
        assert!(storage.load("token").is_none());

        storage.save("token", "abc");
        assert_eq!(storage.load("token").as_deref(), Some("abc"));

        storage.save("token", "def");
        assert_eq!(storage.load("token").as_deref(), Some("def"));
        assert_eq!(storage.len(), 1);

        storage.remove("token");
        assert!(storage.load("token").is_none());
        assert!(storage.is_empty());

        // Removing again is fine
        storage.remove("token");
    }

    #[test]
    fn test_clones_share_entries() {
        let storage = MemoryTokenStorage::new();
        let other = storage.clone();
        storage.save("token", "shared");
        assert_eq!(other.load("token").as_deref(), Some("shared"));
    }
}
