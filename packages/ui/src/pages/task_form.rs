//! Create and update task forms, sharing one [`TaskDraft`].

use api::{ApiClient, ApiError, Category, NewTask, Task, TaskUpdate};
use store::SessionStore;

use super::{require, session_token, Authorized, Destination, Phase, Step};

const CREATE_FAILED: &str = "Failed to create task.";
const FETCH_FAILED: &str = "Failed to fetch task details.";
const UPDATE_FAILED: &str = "Failed to update task.";

/// Editable task fields as typed into the form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`, as a date input produces.
    pub due_date: String,
    pub category: Category,
    pub is_completed: bool,
}

impl TaskDraft {
    /// Prefill from a fetched task, keeping only the date part of `due_date`.
    pub fn from_task(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date_input().to_string(),
            category: task.category,
            is_completed: task.is_completed,
        }
    }

    pub fn validate(&self) -> Result<(), String> {
        require("Title", &self.title)?;
        require("Description", &self.description)?;
        require("Due date", &self.due_date)
    }

    pub fn to_new_task(&self) -> NewTask {
        NewTask {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            category: self.category,
        }
    }

    pub fn to_update(&self) -> TaskUpdate {
        TaskUpdate {
            title: self.title.clone(),
            description: self.description.clone(),
            due_date: self.due_date.clone(),
            is_completed: self.is_completed,
            category: self.category,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateTaskForm {
    pub draft: TaskDraft,
    pub phase: Phase,
}

impl CreateTaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn begin_submit(&mut self, session: &SessionStore) -> Step<Authorized<NewTask>> {
        if self.is_busy() {
            return Step::Blocked;
        }
        if let Err(message) = self.draft.validate() {
            self.phase = Phase::Error(message);
            return Step::Blocked;
        }
        let token = match session_token(session) {
            Ok(token) => token,
            Err(destination) => return Step::Redirect(destination),
        };
        self.phase = Phase::Loading;
        Step::Send(Authorized {
            token,
            payload: self.draft.to_new_task(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<Destination> {
        match result {
            Ok(()) => {
                tracing::info!(title = %self.draft.title, "task created");
                self.phase = Phase::Success;
                Some(Destination::Tasks)
            }
            Err(e) => {
                tracing::error!("failed to create task: {e}");
                self.phase = Phase::Error(CREATE_FAILED.to_string());
                None
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient, session: &SessionStore) -> Option<Destination> {
        match self.begin_submit(session) {
            Step::Send(Authorized { token, payload }) => {
                let result = api.create_task(&token, &payload).await;
                self.finish_submit(result)
            }
            Step::Redirect(destination) => Some(destination),
            Step::Blocked => None,
        }
    }
}

/// Edit form for an existing task. The draft is prefilled by a fetch on page
/// enter; submitting before that fetch succeeds is blocked.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateTaskForm {
    pub task_id: String,
    pub draft: TaskDraft,
    pub load_phase: Phase,
    pub phase: Phase,
}

impl UpdateTaskForm {
    pub fn new(task_id: impl Into<String>) -> Self {
        Self {
            task_id: task_id.into(),
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.load_phase.is_loading() || self.phase.is_loading()
    }

    pub fn begin_load(&mut self, session: &SessionStore) -> Step<String> {
        if self.load_phase.is_loading() {
            return Step::Blocked;
        }
        match session_token(session) {
            Ok(token) => {
                self.load_phase = Phase::Loading;
                Step::Send(token)
            }
            Err(destination) => Step::Redirect(destination),
        }
    }

    pub fn finish_load(&mut self, result: Result<Task, ApiError>) {
        match result {
            Ok(task) => {
                self.draft = TaskDraft::from_task(&task);
                self.load_phase = Phase::Success;
            }
            Err(e) => {
                tracing::error!(task_id = %self.task_id, "failed to fetch task: {e}");
                self.load_phase = Phase::Error(FETCH_FAILED.to_string());
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

    pub fn begin_submit(&mut self, session: &SessionStore) -> Step<Authorized<TaskUpdate>> {
        if self.is_busy() || self.load_phase != Phase::Success {
            return Step::Blocked;
        }
        if let Err(message) = self.draft.validate() {
            self.phase = Phase::Error(message);
            return Step::Blocked;
        }
        let token = match session_token(session) {
            Ok(token) => token,
            Err(destination) => return Step::Redirect(destination),
        };
        self.phase = Phase::Loading;
        Step::Send(Authorized {
            token,
            payload: self.draft.to_update(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<Destination> {
        match result {
            Ok(()) => {
                tracing::info!(task_id = %self.task_id, "task updated");
                self.phase = Phase::Success;
                Some(Destination::Tasks)
            }
            Err(e) => {
                tracing::error!(task_id = %self.task_id, "failed to update task: {e}");
                self.phase = Phase::Error(UPDATE_FAILED.to_string());
                None
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient, session: &SessionStore) -> Option<Destination> {
        match self.begin_submit(session) {
            Step::Send(Authorized { token, payload }) => {
                let result = api.update_task(&token, &self.task_id, &payload).await;
                self.finish_submit(result)
            }
            Step::Redirect(destination) => Some(destination),
            Step::Blocked => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use store::{MemoryTokenStorage, UserInfo};
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn signed_in() -> SessionStore {
        let session = SessionStore::new(MemoryTokenStorage::new());
        session.login(
            UserInfo {
                id: "1".into(),
                email: "ann@example.com".into(),
                username: "ann".into(),
            },
            "jwt-abc",
        );
        session
    }

    fn draft() -> TaskDraft {
        TaskDraft {
            title: "Buy milk".into(),
            description: "2 litres".into(),
            due_date: "2024-05-01".into(),
            category: Category::Shopping,
            is_completed: false,
        }
    }

    fn stored_task() -> serde_json::Value {
        serde_json::json!({
            "id": 3, "title": "Buy milk", "description": "2 litres",
            "due_date": "2024-05-01T00:00:00", "is_completed": false,
            "category": "shopping", "created_at": "2024-04-01T08:30:00"
        })
    }

    #[test]
    fn test_validate_reports_first_missing_field() {
        assert_eq!(draft().validate(), Ok(()));
        let blank_title = TaskDraft {
            title: String::new(),
            ..draft()
        };
        assert_eq!(blank_title.validate(), Err("Title is required".into()));
        let blank_date = TaskDraft {
            due_date: String::new(),
            ..draft()
        };
        assert_eq!(blank_date.validate(), Err("Due date is required".into()));
    }

    #[test]
    fn test_new_draft_defaults_to_other() {
        assert_eq!(TaskDraft::default().category, Category::Other);
    }

    #[tokio::test]
    async fn test_create_posts_draft() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks"))
            .and(header("Authorization", "Bearer jwt-abc"))
            .and(body_json(serde_json::json!({
                "title": "Buy milk",
                "description": "2 litres",
                "due_date": "2024-05-01",
                "category": "shopping"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(stored_task()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let mut form = CreateTaskForm {
            draft: draft(),
            ..CreateTaskForm::default()
        };
        assert_eq!(form.submit(&api, &signed_in()).await, Some(Destination::Tasks));
    }

    #[tokio::test]
    async fn test_create_accepts_partial_response() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(
                ResponseTemplate::new(201)
                    .set_body_json(serde_json::json!({"id": 3, "title": "Buy milk"})),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let mut form = CreateTaskForm {
            draft: draft(),
            ..CreateTaskForm::default()
        };
        assert_eq!(form.submit(&api, &signed_in()).await, Some(Destination::Tasks));
        assert_eq!(form.phase, Phase::Success);
    }

    #[tokio::test]
    async fn test_create_with_empty_title_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201).set_body_json(stored_task()))
            .expect(0)
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let mut form = CreateTaskForm {
            draft: TaskDraft {
                title: String::new(),
                ..draft()
            },
            ..CreateTaskForm::default()
        };
        assert_eq!(form.submit(&api, &signed_in()).await, None);
        assert_eq!(form.phase.error(), Some("Title is required"));
        assert!(!form.is_busy());
    }

    #[tokio::test]
    async fn test_create_failure_keeps_draft() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/tasks"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let mut form = CreateTaskForm {
            draft: draft(),
            ..CreateTaskForm::default()
        };
        assert_eq!(form.submit(&api, &signed_in()).await, None);
        assert_eq!(form.phase.error(), Some("Failed to create task."));
        assert_eq!(form.draft, draft());
    }

    #[test]
    fn test_create_without_session_redirects() {
        let session = SessionStore::new(MemoryTokenStorage::new());
        let mut form = CreateTaskForm {
            draft: draft(),
            ..CreateTaskForm::default()
        };
        assert_eq!(form.begin_submit(&session), Step::Redirect(Destination::Login));
    }

    #[tokio::test]
    async fn test_update_prefills_then_puts() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tasks/3"))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored_task()))
            .expect(1)
            .mount(&mock_server)
            .await;

        Mock::given(method("PUT"))
            .and(path("/tasks/3"))
            .and(body_json(serde_json::json!({
                "title": "Buy oat milk",
                "description": "2 litres",
                "due_date": "2024-05-01",
                "is_completed": true,
                "category": "shopping"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(stored_task()))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let session = signed_in();
        let mut form = UpdateTaskForm::new("3");

        form.load(&api, &session).await;
        assert_eq!(form.load_phase, Phase::Success);
        assert_eq!(form.draft.due_date, "2024-05-01");

        form.draft.title = "Buy oat milk".into();
        form.draft.is_completed = true;
        assert_eq!(form.submit(&api, &session).await, Some(Destination::Tasks));
    }

    #[tokio::test]
    async fn test_update_accepts_no_content() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/tasks/3"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let mut form = UpdateTaskForm {
            draft: draft(),
            load_phase: Phase::Success,
            ..UpdateTaskForm::new("3")
        };
        assert_eq!(form.submit(&api, &signed_in()).await, Some(Destination::Tasks));
        assert_eq!(form.phase, Phase::Success);
    }

    #[tokio::test]
    async fn test_update_fetch_failure() {
        let mock_server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/tasks/3"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let session = signed_in();
        let mut form = UpdateTaskForm::new("3");

        form.load(&api, &session).await;
        assert_eq!(form.load_phase.error(), Some("Failed to fetch task details."));
        // Nothing to submit without a prefilled draft
        assert_eq!(form.begin_submit(&session), Step::Blocked);
    }

    #[tokio::test]
    async fn test_update_failure_message() {
        let mock_server = MockServer::start().await;

        Mock::given(method("PUT"))
            .and(path("/tasks/3"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let mut form = UpdateTaskForm {
            draft: draft(),
            load_phase: Phase::Success,
            ..UpdateTaskForm::new("3")
        };
        assert_eq!(form.submit(&api, &signed_in()).await, None);
        assert_eq!(form.phase.error(), Some("Failed to update task."));
    }
}
