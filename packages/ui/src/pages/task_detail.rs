//! Task detail with a confirm-then-delete flow.

use api::{ApiClient, ApiError, Task};
use store::SessionStore;

use super::{session_token, Destination, Phase, Step};

const NOT_FOUND: &str = "Task not found.";
const DELETE_FAILED: &str = "Failed to delete task.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDetailPage {
    pub task_id: String,
    pub task: Option<Task>,
    pub phase: Phase,
    /// Confirmation prompt is showing.
    pub confirming: bool,
    /// A DELETE is in flight.
    pub deleting: bool,
    pub delete_error: Option<String>,
}

impl TaskDetailPage {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            ..Self::default()
        }
    }

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

    pub fn finish_load(&mut self, result: Result<Task, ApiError>) {
        match result {
            Ok(task) => {
                self.task = Some(task);
                self.phase = Phase::Success;
            }
            Err(e) => {
                tracing::error!(task_id = %self.task_id, "failed to fetch task: {e}");
                self.phase = Phase::Error(NOT_FOUND.to_string());
            }
        }
    }

    pub async fn load(&mut self, api: &ApiClient, session: &SessionStore) -> Option<Destination> {
        match self.begin_load(session) {
            Step::Send(token) => {
                let result = api.get_task(&token, &self.task_id).await;
                self.finish_load(result);
                None
            }
            Step::Redirect(destination) => Some(destination),
            Step::Blocked => None,
        }
    }

    pub fn request_delete(&mut self) {
        if !self.deleting {
            self.confirming = true;
            self.delete_error = None;
        }
    }

    pub fn cancel_delete(&mut self) {
        if !self.deleting {
            self.confirming = false;
        }
    }

    pub fn is_delete_disabled(&self) -> bool {
        self.deleting
    }

    /// Only valid after [`request_delete`](Self::request_delete); otherwise blocked.
    pub fn confirm_delete(&mut self, session: &SessionStore) -> Step<String> {
        if !self.confirming || self.deleting {
            return Step::Blocked;
        }
        match session_token(session) {
            Ok(token) => {
                self.confirming = false;
                self.deleting = true;
                Step::Send(token)
            }
            Err(destination) => Step::Redirect(destination),
        }
    }

    pub fn finish_delete(&mut self, result: Result<(), ApiError>) -> Option<Destination> {
        self.deleting = false;
        match result {
            Ok(()) => {
                tracing::info!(task_id = %self.task_id, "task deleted");
                Some(Destination::Tasks)
            }
            Err(e) => {
                tracing::error!(task_id = %self.task_id, "failed to delete task: {e}");
                self.delete_error = Some(DELETE_FAILED.to_string());
                None
            }
        }
    }

    pub async fn delete(&mut self, api: &ApiClient, session: &SessionStore) -> Option<Destination> {
        match self.confirm_delete(session) {
            Step::Send(token) => {
                let result = api.delete_task(&token, &self.task_id).await;
                self.finish_delete(result)
            }
            Step::Redirect(destination) => Some(destination),
            Step::Blocked => None,
        }
    }
}
