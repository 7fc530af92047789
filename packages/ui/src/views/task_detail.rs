use dioxus::prelude::*;

use super::{use_page_tasks, ConfirmDialog, ErrorBanner};
use crate::pages::{Step, TaskDetailPage};
use crate::{use_api, use_session, Route};

/// One task with edit and delete actions.
#[component]
pub fn TaskDetail(task_id: String) -> Element {
    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let page = use_page_tasks();

    // Track the id in a signal so the fetch re-runs on route param change
    let mut id = use_signal(|| task_id.clone());
    if *id.peek() != task_id {
        id.set(task_id.clone());
    }
    let mut detail = use_signal(|| TaskDetailPage::new(task_id.clone()));

    let load_session = session.clone();
    let load_api = api.clone();
    let load_page = page.clone();
    use_effect(move || {
        let task_id = id();
        detail.set(TaskDetailPage::new(task_id.clone()));
        let step = detail.write().begin_load(&load_session);
        match step {
            Step::Send(token) => {
                let api = load_api.clone();
                spawn(load_page.scoped(async move {
                    let result = api.get_task(&token, &task_id).await;
                    detail.write().finish_load(result);
                }));
            }
            Step::Redirect(destination) => {
                nav.replace(Route::from(destination));
            }
            Step::Blocked => {}
        }
    });

    let handle_confirm = move |_| {
        let step = detail.write().confirm_delete(&session);
        match step {
            Step::Send(token) => {
                let api = api.clone();
                let task_id = detail.peek().task_id.clone();
                spawn(page.scoped(async move {
                    let result = api.delete_task(&token, &task_id).await;
                    let next = detail.write().finish_delete(result);
                    if let Some(destination) = next {
                        nav.replace(Route::from(destination));
                    }
                }));
            }
            Step::Redirect(destination) => {
                nav.replace(Route::from(destination));
            }
            Step::Blocked => {}
        }
    };

    let state = detail.read();
    let delete_disabled = state.is_delete_disabled();

    rsx! {
        p {
            Link { to: Route::Tasks {}, "← Back to tasks" }
        }

        if state.phase.is_loading() {
            p { class: "muted", "Loading task..." }
        } else if let Some(err) = state.phase.error() {
            ErrorBanner { message: err.to_string() }
        } else if let Some(task) = &state.task {
            article {
                h1 { class: "view-title", "{task.title}" }
                p { "{task.description}" }
                dl {
                    dt { "Category" }
                    dd { "{task.category.label()}" }
                    dt { "Due" }
                    dd { "{task.due_date_input()}" }
                    dt { "Status" }
                    dd { "{task.status_label()}" }
                    if let Some(created) = task.created_on() {
                        dt { "Created" }
                        dd { "{created}" }
                    }
                }

                if let Some(err) = &state.delete_error {
                    ErrorBanner { message: err.clone() }
                }

                div {
                    class: "actions",
                    Link {
                        class: "btn",
                        to: Route::UpdateTask { task_id: task.id.clone() },
                        "Edit"
                    }
                    button {
                        class: "btn btn-danger",
                        disabled: delete_disabled,
                        onclick: move |_| detail.write().request_delete(),
                        if delete_disabled { "Deleting..." } else { "Delete" }
                    }
                }
            }
        }

        if state.confirming {
            ConfirmDialog {
                message: "Are you sure you want to delete this task?",
                confirm_label: "Delete",
                busy: delete_disabled,
                on_confirm: handle_confirm,
                on_cancel: move |_| detail.write().cancel_delete(),
            }
        }
    }
}
