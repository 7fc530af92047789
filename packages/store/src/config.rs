//! # Client configuration: `config.toml`
//!
//! Defines where the REST backend lives and which key the bearer token is
//! stored under. The desktop app reads an optional `config.toml` from its data
//! directory; the web app builds the config at compile time. Either way the
//! `TASKPAD_API_URL` environment variable wins over the file.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:8000"   # no trailing slash needed
//!
//! [storage]
//! token_key = "token"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`ClientConfig`] | Top-level config. Builder helpers, TOML (de)serialisation, env override. |
//! | [`ApiConfig`] | Backend base URL. |
//! | [`StorageConfig`] | Durable storage key for the token, default **`"token"`**. |
//!
//! All structs derive or implement `Default`, so a missing or empty file is
//! equivalent to the default configuration.

use serde::{Deserialize, Serialize};

use crate::session::TOKEN_KEY;

/// Environment variable overriding [`ApiConfig::base_url`].
pub const API_URL_ENV: &str = "TASKPAD_API_URL";

/// Errors raised while reading or writing the config file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("failed to serialise config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Top-level configuration stored in `config.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub storage: StorageConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every request path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

/// Durable storage settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StorageConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_token_key() -> String {
    TOKEN_KEY.to_string()
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl ClientConfig {
    /// Create a config pointing at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            api: ApiConfig {
                base_url: base_url.into(),
            },
            storage: StorageConfig::default(),
        }
    }

    /// Builder method to set the token storage key.
    pub fn with_token_key(mut self, key: impl Into<String>) -> Self {
        self.storage.token_key = key.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "config.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load from `path`, treating a missing file as the default config.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => Ok(Self::from_toml(&content)?),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Apply an override for the base URL. Blank values are ignored.
    pub fn with_base_url_override(mut self, value: Option<&str>) -> Self {
        if let Some(url) = value.map(str::trim).filter(|u| !u.is_empty()) {
            self.api.base_url = url.to_string();
        }
        self
    }

    /// Apply the `TASKPAD_API_URL` environment variable, if set.
    pub fn with_env_overrides(self) -> Self {
        let value = std::env::var(API_URL_ENV).ok();
        self.with_base_url_override(value.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.api.base_url, "http://localhost:8000");
        assert_eq!(config.storage.token_key, "token");
        assert_eq!(ClientConfig::from_toml("").unwrap(), config);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "https://tasks.example.com/api"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://tasks.example.com/api");
        assert_eq!(config.storage.token_key, "token");
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = ClientConfig::new("https://example.com").with_token_key("jwt");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_base_url_override() {
        let config = ClientConfig::default().with_base_url_override(Some("https://x.test"));
        assert_eq!(config.api.base_url, "https://x.test");

        let config = ClientConfig::default().with_base_url_override(Some("   "));
        assert_eq!(config.api.base_url, "http://localhost:8000");

        let config = ClientConfig::default().with_base_url_override(None);
        assert_eq!(config.api.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let path = std::env::temp_dir().join(format!("taskpad_no_config_{}.toml", std::process::id()));
        let _ = std::fs::remove_file(&path);
        assert_eq!(ClientConfig::load(&path).unwrap(), ClientConfig::default());
    }

    #[test]
    fn test_load_invalid_file_is_error() {
        let path = std::env::temp_dir().join(format!("taskpad_bad_config_{}.toml", std::process::id()));
        std::fs::write(&path, "[api\nbase_url = 1").unwrap();
        assert!(matches!(ClientConfig::load(&path), Err(ConfigError::Parse(_))));
        let _ = std::fs::remove_file(&path);
    }
}
