//! Task endpoints. All of them require a bearer token.

use reqwest::Method;
use serde::Serialize;
use store::{Category, Task};

use crate::{ApiClient, ApiError};

/// Body of `POST /tasks`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub due_date: String,
    pub category: Category,
}

/// Body of `PUT /tasks/:id`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct TaskUpdate {
    pub title: String,
    pub description: String,
    /// `YYYY-MM-DD`
    pub due_date: String,
    pub is_completed: bool,
    pub category: Category,
}

fn task_path(id: &str) -> String {
    format!("/tasks/{id}")
}

impl ApiClient {
    /// Every task owned by the token's user.
    pub async fn list_tasks(&self, token: &str) -> Result<Vec<Task>, ApiError> {
        self.request::<(), _>(Method::GET, "/tasks", None, Some(token))
            .await
    }

    /// Any 2xx counts as created; the response body is not read.
    pub async fn create_task(&self, token: &str, task: &NewTask) -> Result<(), ApiError> {
        self.request_empty(Method::POST, "/tasks", Some(task), Some(token))
            .await
    }

    pub async fn get_task(&self, token: &str, id: &str) -> Result<Task, ApiError> {
        self.request::<(), _>(Method::GET, &task_path(id), None, Some(token))
            .await
    }

    pub async fn update_task(
        &self,
        token: &str,
        id: &str,
        update: &TaskUpdate,
    ) -> Result<(), ApiError> {
        self.request_empty(Method::PUT, &task_path(id), Some(update), Some(token))
            .await
    }

    pub async fn delete_task(&self, token: &str, id: &str) -> Result<(), ApiError> {
        self.request_empty::<()>(Method::DELETE, &task_path(id), None, Some(token))
            .await
    }
}
