use dioxus::prelude::*;

use crate::{use_session, Route};

#[component]
pub fn Home() -> Element {
    let signed_in = use_session().is_authenticated();

    rsx! {
        section {
            h1 { class: "view-title", "Taskpad" }
            p { class: "muted", "Keep track of what needs doing, by category and due date." }
            div {
                class: "actions",
                if signed_in {
                    Link { class: "btn btn-primary", to: Route::Tasks {}, "Go to your tasks" }
                } else {
                    Link { class: "btn btn-primary", to: Route::Login {}, "Log in" }
                    Link { class: "btn", to: Route::Signup {}, "Create an account" }
                }
            }
        }
    }
}
