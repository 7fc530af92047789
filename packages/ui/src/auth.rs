//! Session context and hooks for the UI.
//!
//! The app builds one [`SessionStore`] and one [`ApiClient`] at startup and
//! hands them to [`SessionProvider`]. Views reach them through [`use_session`]
//! and [`use_api`].

use api::ApiClient;
use dioxus::prelude::*;
use store::SessionStore;

const MISSING_SESSION: &str = "use_session must be used within a SessionProvider";
const MISSING_API: &str = "use_api must be used within a SessionProvider";

/// Provider component that makes the session and API client available to
/// every descendant. Wrap the router with this component.
#[component]
pub fn SessionProvider(session: SessionStore, api: ApiClient, children: Element) -> Element {
    use_context_provider(|| session.clone());
    use_context_provider(|| api.clone());

    rsx! {
        {children}
    }
}

/// The shared session store.
///
/// # Panics
///
/// When called outside a [`SessionProvider`].
pub fn use_session() -> SessionStore {
    session_or_panic(try_use_context::<SessionStore>())
}

/// The shared API client.
///
/// # Panics
///
/// When called outside a [`SessionProvider`].
pub fn use_api() -> ApiClient {
    match try_use_context::<ApiClient>() {
        Some(api) => api,
        None => panic!("{MISSING_API}"),
    }
}

fn session_or_panic(found: Option<SessionStore>) -> SessionStore {
    match found {
        Some(session) => session,
        None => panic!("{MISSING_SESSION}"),
    }
}

/// Button that ends the session and returns to the login page.
#[component]
pub fn LogoutButton(
    #[props(default = "Logout".to_string())] label: String,
    #[props(default = "".to_string())] class: String,
) -> Element {
    let session = use_session();
    let nav = use_navigator();

    let onclick = move |_| {
        session.logout();
        nav.replace(crate::Route::Login {});
    };

    rsx! {
        button {
            class: "{class}",
            onclick: onclick,
            "{label}"
        }
    }
}
