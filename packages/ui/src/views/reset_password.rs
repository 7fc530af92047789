use std::time::Duration;

use dioxus::prelude::*;

use super::{use_page_tasks, ErrorBanner, NoticeBanner};
use crate::pages::reset_password::REDIRECT_DELAY;
use crate::pages::ResetPasswordForm;
use crate::{use_api, Route};

async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    gloo_timers::future::sleep(duration).await;
    #[cfg(not(target_arch = "wasm32"))]
    tokio::time::sleep(duration).await;
}

/// Target of the emailed reset link; `token` comes from the query string.
#[component]
pub fn ResetPassword(token: String) -> Element {
    let api = use_api();
    let nav = use_navigator();
    let page = use_page_tasks();
    let mut form = use_signal(|| ResetPasswordForm::new(Some(token.clone())));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = form.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        spawn(page.scoped(async move {
            let result = api.reset_password(&request).await;
            let next = form.write().finish_submit(result);
            if let Some(destination) = next {
                sleep(REDIRECT_DELAY).await;
                nav.replace(Route::from(destination));
            }
        }));
    };

    let state = form.read();
    let busy = state.is_busy();

    rsx! {
        h1 { class: "view-title", "Reset password" }
        form {
            class: "form",
            onsubmit: handle_submit,

            if let Some(message) = &state.message {
                NoticeBanner { message: message.clone() }
            }
            if let Some(err) = state.phase.error() {
                ErrorBanner { message: err.to_string() }
            }

            label {
                "New password"
                input {
                    r#type: "password",
                    required: true,
                    value: "{state.password}",
                    oninput: move |evt: FormEvent| form.write().password = evt.value(),
                }
            }
            label {
                "Confirm new password"
                input {
                    r#type: "password",
                    required: true,
                    value: "{state.confirm_password}",
                    oninput: move |evt: FormEvent| form.write().confirm_password = evt.value(),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: busy,
                if busy { "Resetting..." } else { "Reset password" }
            }
        }
    }
}
