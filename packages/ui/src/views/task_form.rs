//! Create and edit task views sharing [`TaskFields`].

use api::Category;
use dioxus::prelude::*;

use super::{use_page_tasks, ErrorBanner};
use crate::pages::{Authorized, CreateTaskForm, Step, TaskDraft, UpdateTaskForm};
use crate::{use_api, use_session, Route};

/// Inputs for the editable task fields. `show_completed` adds the status checkbox.
#[component]
pub fn TaskFields(
    draft: TaskDraft,
    on_change: EventHandler<TaskDraft>,
    #[props(default)] show_completed: bool,
) -> Element {
    let title_draft = draft.clone();
    let description_draft = draft.clone();
    let due_draft = draft.clone();
    let category_draft = draft.clone();
    let completed_draft = draft.clone();

    rsx! {
        label {
            "Title"
            input {
                r#type: "text",
                required: true,
                value: "{draft.title}",
                oninput: move |evt: FormEvent| {
                    on_change.call(TaskDraft { title: evt.value(), ..title_draft.clone() })
                },
            }
        }
        label {
            "Description"
            textarea {
                required: true,
                rows: "4",
                value: "{draft.description}",
                oninput: move |evt: FormEvent| {
                    on_change.call(TaskDraft { description: evt.value(), ..description_draft.clone() })
                },
            }
        }
        label {
            "Due date"
            input {
                r#type: "date",
                required: true,
                value: "{draft.due_date}",
                oninput: move |evt: FormEvent| {
                    on_change.call(TaskDraft { due_date: evt.value(), ..due_draft.clone() })
                },
            }
        }
        label {
            "Category"
            select {
                value: "{draft.category.as_str()}",
                onchange: move |evt: FormEvent| {
                    on_change.call(TaskDraft {
                        category: Category::from_wire(&evt.value()),
                        ..category_draft.clone()
                    })
                },
                for category in Category::ALL {
                    option {
                        key: "{category.as_str()}",
                        value: "{category.as_str()}",
                        selected: category == draft.category,
                        "{category.label()}"
                    }
                }
            }
        }
        if show_completed {
            label {
                class: "inline",
                input {
                    r#type: "checkbox",
                    checked: draft.is_completed,
                    onchange: move |evt: FormEvent| {
                        on_change.call(TaskDraft { is_completed: evt.checked(), ..completed_draft.clone() })
                    },
                }
                "Completed"
            }
        }
    }
}

#[component]
pub fn CreateTask() -> Element {
    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let page = use_page_tasks();
    let mut form = use_signal(CreateTaskForm::new);

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let step = form.write().begin_submit(&session);
        match step {
            Step::Send(Authorized { token, payload }) => {
                let api = api.clone();
                spawn(page.scoped(async move {
                    let result = api.create_task(&token, &payload).await;
                    let next = form.write().finish_submit(result);
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

    let state = form.read();
    let busy = state.is_busy();

    rsx! {
        h1 { class: "view-title", "New task" }
        form {
            class: "form",
            onsubmit: handle_submit,

            if let Some(err) = state.phase.error() {
                ErrorBanner { message: err.to_string() }
            }

            TaskFields {
                draft: state.draft.clone(),
                on_change: move |draft| form.write().draft = draft,
            }

            div {
                class: "actions",
                button {
                    class: "btn btn-primary",
                    r#type: "submit",
                    disabled: busy,
                    if busy { "Creating..." } else { "Create task" }
                }
                Link { class: "btn", to: Route::Tasks {}, "Cancel" }
            }
        }
    }
}

#[component]
pub fn UpdateTask(task_id: String) -> Element {
    let session = use_session();
    let api = use_api();
    let nav = use_navigator();
    let page = use_page_tasks();

    let mut id = use_signal(|| task_id.clone());
    if *id.peek() != task_id {
        id.set(task_id.clone());
    }
    let mut form = use_signal(|| UpdateTaskForm::new(task_id.clone()));

    let load_session = session.clone();
    let load_api = api.clone();
    let load_page = page.clone();
    use_effect(move || {
        let task_id = id();
        form.set(UpdateTaskForm::new(task_id.clone()));
        let step = form.write().begin_load(&load_session);
        match step {
            Step::Send(token) => {
                let api = load_api.clone();
                spawn(load_page.scoped(async move {
                    let result = api.get_task(&token, &task_id).await;
                    form.write().finish_load(result);
                }));
            }
            Step::Redirect(destination) => {
                nav.replace(Route::from(destination));
            }
            Step::Blocked => {}
        }
    });

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let step = form.write().begin_submit(&session);
        match step {
            Step::Send(Authorized { token, payload }) => {
                let api = api.clone();
                let task_id = form.peek().task_id.clone();
                spawn(page.scoped(async move {
                    let result = api.update_task(&token, &task_id, &payload).await;
                    let next = form.write().finish_submit(result);
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

    let state = form.read();
    let busy = state.is_busy();

    rsx! {
        h1 { class: "view-title", "Edit task" }

        if state.load_phase.is_loading() {
            p { class: "muted", "Loading task..." }
        } else if let Some(err) = state.load_phase.error() {
            ErrorBanner { message: err.to_string() }
        } else {
            form {
                class: "form",
                onsubmit: handle_submit,

                if let Some(err) = state.phase.error() {
                    ErrorBanner { message: err.to_string() }
                }

                TaskFields {
                    draft: state.draft.clone(),
                    on_change: move |draft| form.write().draft = draft,
                    show_completed: true,
                }

                div {
                    class: "actions",
                    button {
                        class: "btn btn-primary",
                        r#type: "submit",
                        disabled: busy,
                        if busy { "Saving..." } else { "Save changes" }
                    }
                    Link {
                        class: "btn",
                        to: Route::TaskDetail { task_id: state.task_id.clone() },
                        "Cancel"
                    }
                }
            }
        }
    }
}
