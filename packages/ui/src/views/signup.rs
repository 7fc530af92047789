//! Registration page view.

use dioxus::prelude::*;

use super::{use_page_tasks, ErrorBanner};
use crate::pages::SignupForm;
use crate::{use_api, Route};

#[component]
pub fn Signup() -> Element {
    let api = use_api();
    let nav = use_navigator();
    let page = use_page_tasks();
    let mut form = use_signal(SignupForm::new);

    let handle_signup = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = form.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        spawn(page.scoped(async move {
            let result = api.signup(&request).await;
            let next = form.write().finish_submit(result);
            if let Some(destination) = next {
                nav.replace(Route::from(destination));
            }
        }));
    };

    let state = form.read();
    let busy = state.is_busy();

    rsx! {
        h1 { class: "view-title", "Create account" }
        form {
            class: "form",
            onsubmit: handle_signup,

            if let Some(err) = state.phase.error() {
                ErrorBanner { message: err.to_string() }
            }

            label {
                "Username"
                input {
                    r#type: "text",
                    required: true,
                    value: "{state.username}",
                    oninput: move |evt: FormEvent| form.write().username = evt.value(),
                }
            }
            label {
                "Email"
                input {
                    r#type: "email",
                    required: true,
                    value: "{state.email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
            }
            label {
                "Password"
                input {
                    r#type: "password",
                    required: true,
                    value: "{state.password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: busy,
                if busy { "Creating account..." } else { "Sign up" }
            }
        }
        p {
            class: "muted",
            "Already have an account? "
            Link { to: Route::Login {}, "Log in" }
        }
    }
}
