//! Task list view with a title search box.

use dioxus::prelude::*;

use super::{use_page_tasks, ErrorBanner};
use crate::pages::{Step, TaskListPage};
use crate::{use_api, use_session, Route};

#[component]
pub fn Tasks() -> Element {
    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let page = use_page_tasks();
    let mut list = use_signal(TaskListPage::new);

    let load_session = session.clone();
    use_effect(move || {
        let step = list.write().begin_load(&load_session);
        match step {
            Step::Send(token) => {
                let api = api.clone();
                spawn(page.scoped(async move {
                    let result = api.list_tasks(&token).await;
                    list.write().finish_load(result);
                }));
            }
            Step::Redirect(destination) => {
                nav.replace(Route::from(destination));
            }
            Step::Blocked => {}
        }
    });

    let handle_logout = move |_| {
        let destination = list.peek().logout(&session);
        nav.replace(Route::from(destination));
    };

    let state = list.read();
    let visible = state.visible();

    rsx! {
        h1 { class: "view-title", "Your tasks" }
        div {
            class: "toolbar",
            input {
                class: "search",
                r#type: "search",
                placeholder: "Search by title",
                value: "{state.search}",
                oninput: move |evt: FormEvent| list.write().search = evt.value(),
            }
            Link { class: "btn btn-primary", to: Route::CreateTask {}, "New task" }
            button { class: "btn", onclick: handle_logout, "Logout" }
        }

        if state.phase.is_loading() {
            p { class: "muted", "Loading tasks..." }
        } else if let Some(err) = state.phase.error() {
            ErrorBanner { message: err.to_string() }
        } else if visible.is_empty() {
            p { class: "muted", "No tasks found." }
        } else {
            ul {
                class: "task-list",
                for task in visible {
                    li {
                        key: "{task.id}",
                        div {
                            Link {
                                class: if task.is_completed { "task-completed" } else { "" },
                                to: Route::TaskDetail { task_id: task.id.clone() },
                                "{task.title}"
                            }
                            div { class: "muted", "{task.category.label()}" }
                        }
                        div {
                            class: "muted",
                            "Due {task.due_date_input()} · {task.status_label()}"
                        }
                    }
                }
            }
        }
    }
}
