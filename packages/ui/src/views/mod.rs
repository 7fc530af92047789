use dioxus::prelude::*;

use crate::pages::PageTasks;

mod layout;
pub use layout::AppLayout;

mod confirm_dialog;
pub use confirm_dialog::ConfirmDialog;

mod home;
pub use home::Home;

mod login;
pub use login::Login;

mod signup;
pub use signup::Signup;

mod forgot_password;
pub use forgot_password::ForgotPassword;

mod reset_password;
pub use reset_password::ResetPassword;

mod tasks;
pub use tasks::Tasks;

mod task_detail;
pub use task_detail::TaskDetail;

mod task_form;
pub use task_form::{CreateTask, TaskFields, UpdateTask};

/// Work tied to the calling component; aborted when it unmounts.
pub(crate) fn use_page_tasks() -> PageTasks {
    let tasks = use_hook(PageTasks::new);
    use_drop({
        let tasks = tasks.clone();
        move || tasks.exit()
    });
    tasks
}

/// Red banner for a page's error message.
#[component]
pub fn ErrorBanner(message: String) -> Element {
    rsx! {
        div {
            class: "banner banner-error",
            role: "alert",
            "{message}"
        }
    }
}

#[component]
pub fn NoticeBanner(message: String) -> Element {
    rsx! {
        div {
            class: "banner banner-notice",
            "{message}"
        }
    }
}
