//! Login page view with email/password form.

use dioxus::prelude::*;

use super::{use_page_tasks, ErrorBanner};
use crate::pages::LoginForm;
use crate::{use_api, use_session, Route};

#[component]
pub fn Login() -> Element {
    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let page = use_page_tasks();
    let mut form = use_signal(LoginForm::new);

    let handle_login = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = form.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        let session = session.clone();
        spawn(page.scoped(async move {
            let result = api.login(&request).await;
            let next = form.write().finish_submit(result, &session);
            if let Some(destination) = next {
                nav.replace(Route::from(destination));
            }
        }));
    };

    let state = form.read();
    let busy = state.is_busy();

    rsx! {
        h1 { class: "view-title", "Log in" }
        form {
            class: "form",
            onsubmit: handle_login,

            if let Some(err) = state.phase.error() {
                ErrorBanner { message: err.to_string() }
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
                if busy { "Logging in..." } else { "Log in" }
            }
        }
        p {
            class: "muted",
            Link { to: Route::ForgotPassword {}, "Forgot your password?" }
        }
        p {
            class: "muted",
            "Don't have an account? "
            Link { to: Route::Signup {}, "Sign up" }
        }
    }
}
