use dioxus::prelude::*;

use crate::{use_session, LogoutButton, Route};

const VIEWS_CSS: Asset = asset!("/src/views/views.css");

/// Header plus the routed page.
#[component]
pub fn AppLayout() -> Element {
    // Subscribing to the route re-renders the header after login and logout,
    // both of which navigate.
    let _route = use_route::<Route>();
    let session = use_session();
    let current = session.current();

    rsx! {
        document::Link { rel: "stylesheet", href: VIEWS_CSS }
        header {
            class: "navbar",
            Link { class: "brand", to: Route::Home {}, "Taskpad" }
            nav {
                if let Some(current) = current {
                    Link { to: Route::Tasks {}, "Tasks" }
                    span { class: "muted", "{current.username}" }
                    LogoutButton { class: "btn btn-link" }
                } else {
                    Link { to: Route::Login {}, "Login" }
                    Link { to: Route::Signup {}, "Sign up" }
                }
            }
        }
        main {
            class: "view-page",
            Outlet::<Route> {}
        }
        footer {
            class: "footer muted",
            "Taskpad"
        }
    }
}
