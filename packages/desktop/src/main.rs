use std::path::PathBuf;

use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, FileTokenStorage, SessionStore};
use tracing_subscriber::EnvFilter;
use ui::{Route, SessionProvider};

/// Per-user directory holding `config.toml` and the stored token.
fn data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("taskpad")
}

fn load_config(dir: &std::path::Path) -> ClientConfig {
    let path = dir.join(ClientConfig::filename());
    let config = match ClientConfig::load(&path) {
        Ok(config) => config,
        Err(e) => {
            tracing::warn!(path = %path.display(), "ignoring unreadable config: {e}");
            ClientConfig::default()
        }
    };
    config.with_env_overrides()
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let dir = use_hook(data_dir);
    let config = use_hook(|| load_config(&dir));
    let api = use_hook(|| {
        tracing::info!(base_url = %config.api.base_url, "starting desktop client");
        ApiClient::from_config(&config)
    });
    let session = use_hook(|| {
        SessionStore::with_key(FileTokenStorage::new(dir.clone()), &config.storage.token_key)
    });

    rsx! {
        SessionProvider {
            session: session,
            api: api,
            Router::<Route> {}
        }
    }
}
