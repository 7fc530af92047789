//! Signup form. A successful registration sends the user to the login page.

use api::{ApiClient, ApiError, SignupRequest};

use super::{require, Destination, Phase};

const SIGNUP_FAILED: &str = "Signup failed";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
    pub phase: Phase,
}

impl SignupForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn begin_submit(&mut self) -> Option<SignupRequest> {
        if self.is_busy() {
            return None;
        }
        let check = require("Username", &self.username)
            .and_then(|_| require("Email", &self.email))
            .and_then(|_| require("Password", &self.password));
        if let Err(message) = check {
            self.phase = Phase::Error(message);
            return None;
        }
        self.phase = Phase::Loading;
        Some(SignupRequest {
            email: self.email.clone(),
            username: self.username.clone(),
            password: self.password.clone(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<Destination> {
        match result {
            Ok(()) => {
                self.phase = Phase::Success;
                Some(Destination::Login)
            }
            Err(e) => {
                self.phase = Phase::Error(e.message_or(SIGNUP_FAILED));
                None
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient) -> Option<Destination> {
        let request = self.begin_submit()?;
        let result = api.signup(&request).await;
        self.finish_submit(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn filled() -> SignupForm {
        SignupForm {
            username: "ann".into(),
            email: "ann@example.com".into(),
            password: "hunter22".into(),
            ..SignupForm::default()
        }
    }

    #[tokio::test]
    async fn test_signup_redirects_to_login() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .and(body_json(serde_json::json!({
                "email": "ann@example.com",
                "username": "ann",
                "password": "hunter22"
            })))
            .respond_with(ResponseTemplate::new(201))
            .expect(1)
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let mut form = filled();
        assert_eq!(form.submit(&api).await, Some(Destination::Login));
        assert_eq!(form.phase, Phase::Success);
    }

    #[tokio::test]
    async fn test_signup_conflict_shows_detail() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/auth/signup"))
            .respond_with(
                ResponseTemplate::new(400)
                    .set_body_json(serde_json::json!({"detail": "Email already registered"})),
            )
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let mut form = filled();
        assert_eq!(form.submit(&api).await, None);
        assert_eq!(form.phase.error(), Some("Email already registered"));
        assert_eq!(form.username, "ann");
    }

    #[tokio::test]
    async fn test_empty_username_sends_nothing() {
        let mock_server = MockServer::start().await;

        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(201))
            .expect(0)
            .mount(&mock_server)
            .await;

        let api = ApiClient::new(mock_server.uri());
        let mut form = SignupForm {
            username: String::new(),
            ..filled()
        };
        assert_eq!(form.submit(&api).await, None);
        assert_eq!(form.phase.error(), Some("Username is required"));
    }
}
