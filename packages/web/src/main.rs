use api::ApiClient;
use dioxus::prelude::*;
use store::{ClientConfig, SessionStore, TokenStorage};
use ui::{Route, SessionProvider};

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

/// Backend location, fixed when the bundle is built.
fn config() -> ClientConfig {
    ClientConfig::default().with_base_url_override(option_env!("TASKPAD_API_URL"))
}

#[cfg(target_arch = "wasm32")]
fn token_storage() -> impl TokenStorage + Send + Sync + 'static {
    store::LocalTokenStorage::new()
}

// Native builds of this crate only exist for `dx` tooling and checks.
#[cfg(not(target_arch = "wasm32"))]
fn token_storage() -> impl TokenStorage + Send + Sync + 'static {
    store::MemoryTokenStorage::new()
}

#[component]
fn App() -> Element {
    let api = use_hook(|| {
        let config = config();
        tracing::info!(base_url = %config.api.base_url, "starting web client");
        ApiClient::from_config(&config)
    });
    let session = use_hook(|| SessionStore::with_key(token_storage(), &config().storage.token_key));

    rsx! {
        SessionProvider {
            session: session,
            api: api,
            Router::<Route> {}
        }
    }
}
