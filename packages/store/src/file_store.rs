//! # Filesystem-backed token storage
//!
//! [`FileTokenStorage`] keeps each key in its own file under a base directory.
//! It is used on desktop so the token survives an app restart.
//!
//! ## Layout
//!
//! ```text
//! <base_dir>/
//! └── <key>          # file containing the raw value, e.g. `token`
//! ```
//!
//! ## Platform data directories
//!
//! The desktop entry point passes [`dirs::data_dir()`]`/taskpad`:
//!
//! | Platform | Path |
//! |----------|------|
//! | macOS | `~/Library/Application Support/taskpad/` |
//! | Linux | `~/.local/share/taskpad/` |
//! | Windows | `C:\Users\<user>\AppData\Roaming\taskpad\` |
//!
//! [`dirs::data_dir()`]: https://docs.rs/dirs

use std::path::PathBuf;

use crate::storage::TokenStorage;

/// Filesystem-backed TokenStorage for desktop persistence.
#[derive(Clone, Debug)]
pub struct FileTokenStorage {
    base: PathBuf,
}

impl FileTokenStorage {
    pub fn new(base: PathBuf) -> Self {
        Self { base }
    }

    fn key_path(&self, key: &str) -> PathBuf {
        self.base.join(key)
    }
}

impl TokenStorage for FileTokenStorage {
    fn load(&self, key: &str) -> Option<String> {
        let content = std::fs::read_to_string(self.key_path(key)).ok()?;
        let value = content.trim();
        if value.is_empty() {
            None
        } else {
            Some(value.to_string())
        }
    }

    fn save(&self, key: &str, value: &str) {
        if let Err(e) = std::fs::create_dir_all(&self.base) {
            tracing::warn!("Failed to create storage dir {}: {}", self.base.display(), e);
            return;
        }
        if let Err(e) = std::fs::write(self.key_path(key), value) {
            tracing::warn!("Failed to write {key}: {e}");
        }
    }

    fn remove(&self, key: &str) {
        match std::fs::remove_file(self.key_path(key)) {
            Ok(()) => {}
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => tracing::warn!("Failed to remove {key}: {e}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("taskpad_{name}_{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&dir);
        dir
    }

    #[test]
    fn test_file_storage_survives_reopen() {
        let dir = scratch_dir("reopen");

        let storage = FileTokenStorage::new(dir.clone());
        storage.save("token", "jwt-123");

        // Re-open from same directory
        let reopened = FileTokenStorage::new(dir.clone());
        assert_eq!(reopened.load("token").as_deref(), Some("jwt-123"));

        reopened.remove("token");
        assert!(storage.load("token").is_none());

        // Cleanup
        let _ = std::fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_remove_missing_key_is_noop() {
        let dir = scratch_dir("missing");
        let storage = FileTokenStorage::new(dir.clone());
        storage.remove("token");
        assert!(storage.load("token").is_none());
        let _ = std::fs::remove_dir_all(&dir);
    }
}
