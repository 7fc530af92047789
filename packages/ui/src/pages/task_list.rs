//! Task list: fetched on page enter, filtered locally by title.

use api::{ApiClient, ApiError, Task};
use store::SessionStore;

use super::{session_token, Destination, Phase, Step};

const FETCH_FAILED: &str = "Failed to fetch tasks.";

/// Tasks whose title contains `term`, ignoring case. An empty term keeps all.
pub fn filter_tasks<'a>(tasks: &'a [Task], term: &str) -> Vec<&'a Task> {
    let needle = term.to_lowercase();
    tasks
        .iter()
        .filter(|task| task.title.to_lowercase().contains(&needle))
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskListPage {
    pub tasks: Vec<Task>,
    pub search: String,
    pub phase: Phase,
}

impl TaskListPage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Token to fetch with, or a redirect when there is no session.
    pub fn begin_load(&mut self, session: &SessionStore) -> Step<String> {
        if self.phase.is_loading() {
            return Step::Blocked;
        }
        match session_token(session) {
            Ok(token) => {
                self.phase = Phase::Loading;
                Step::Send(token)
            }
            Err(destination) => Step::Redirect(destination),
        }
    }

    pub fn finish_load(&mut self, result: Result<Vec<Task>, ApiError>) {
        match result {
            Ok(tasks) => {
                tracing::debug!(count = tasks.len(), "tasks loaded");
                self.tasks = tasks;
                self.phase = Phase::Success;
            }
            Err(e) => {
                tracing::error!("failed to fetch tasks: {e}");
                self.phase = Phase::Error(FETCH_FAILED.to_string());
            }
        }
    }

    pub async fn load(&mut self, api: &ApiClient, session: &SessionStore) -> Option<Destination> {
        match self.begin_load(session) {
            Step::Send(token) => {
                let result = api.list_tasks(&token).await;
                self.finish_load(result);
                None
            }
            Step::Redirect(destination) => Some(destination),
            Step::Blocked => None,
        }
    }

    /// Tasks matching the current search term.
    pub fn visible(&self) -> Vec<&Task> {
        filter_tasks(&self.tasks, &self.search)
    }

    pub fn logout(&self, session: &SessionStore) -> Destination {
        session.logout();
        Destination::Login
    }
}
