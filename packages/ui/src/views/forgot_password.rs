use dioxus::prelude::*;

use super::{use_page_tasks, ErrorBanner, NoticeBanner};
use crate::pages::ForgotPasswordForm;
use crate::{use_api, Route};

#[component]
pub fn ForgotPassword() -> Element {
    let api = use_api();
    let page = use_page_tasks();
    let mut form = use_signal(ForgotPasswordForm::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let Some(request) = form.write().begin_submit() else {
            return;
        };
        let api = api.clone();
        spawn(page.scoped(async move {
            let result = api.forgot_password(&request).await;
            form.write().finish_submit(result);
        }));
    };

    let state = form.read();
    let busy = state.is_busy();

    rsx! {
        h1 { class: "view-title", "Forgot password" }
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
                "Email"
                input {
                    r#type: "email",
                    required: true,
                    value: "{state.email}",
                    oninput: move |evt: FormEvent| form.write().email = evt.value(),
                }
            }
            button {
                class: "btn btn-primary",
                r#type: "submit",
                disabled: busy,
                if busy { "Sending..." } else { "Send reset link" }
            }
        }
        p {
            class: "muted",
            Link { to: Route::Login {}, "Back to login" }
        }
    }
}
