//! Login form: exchanges credentials for a session.

use api::{ApiClient, ApiError, LoginRequest, LoginResponse};
use store::SessionStore;

use super::{require, Destination, Phase};

const LOGIN_FAILED: &str = "Login failed";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub phase: Phase,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the submit control should be disabled.
    pub fn is_busy(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn begin_submit(&mut self) -> Option<LoginRequest> {
        if self.is_busy() {
            return None;
        }
        if let Err(message) =
            require("Email", &self.email).and_then(|_| require("Password", &self.password))
        {
            self.phase = Phase::Error(message);
            return None;
        }
        self.phase = Phase::Loading;
        Some(LoginRequest {
            email: self.email.clone(),
            password: self.password.clone(),
        })
    }

    /// Start the session on success; the form keeps its values on failure.
    pub fn finish_submit(
        &mut self,
        result: Result<LoginResponse, ApiError>,
        session: &SessionStore,
    ) -> Option<Destination> {
        match result {
            Ok(response) if !response.access_token.is_empty() => {
                session.login(response.user, &response.access_token);
                self.phase = Phase::Success;
                Some(Destination::Tasks)
            }
            Ok(_) => {
                tracing::warn!("login response carried an empty access token");
                self.phase = Phase::Error(LOGIN_FAILED.to_string());
                None
            }
            Err(e) => {
                self.phase = Phase::Error(e.message_or(LOGIN_FAILED));
                None
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient, session: &SessionStore) -> Option<Destination> {
        let request = self.begin_submit()?;
        let result = api.login(&request).await;
        self.finish_submit(result, session)
    }
}
