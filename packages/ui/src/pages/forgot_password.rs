//! Forgot-password form. Success keeps the user on the page with a notice.

use api::{ApiClient, ApiError, ForgotPasswordRequest};

use super::{require, Phase};

pub const RESET_LINK_SENT: &str = "Password reset link has been sent to your email.";
const GENERIC_ERROR: &str = "An error occurred.";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ForgotPasswordForm {
    pub email: String,
    pub phase: Phase,
    /// Confirmation shown after a successful request.
    pub message: Option<String>,
}

impl ForgotPasswordForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn begin_submit(&mut self) -> Option<ForgotPasswordRequest> {
        if self.is_busy() {
            return None;
        }
        self.message = None;
        if let Err(message) = require("Email", &self.email) {
            self.phase = Phase::Error(message);
            return None;
        }
        self.phase = Phase::Loading;
        Some(ForgotPasswordRequest {
            email: self.email.clone(),
        })
    }

    pub fn finish_submit(&mut self, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.phase = Phase::Success;
                self.message = Some(RESET_LINK_SENT.to_string());
            }
            Err(e) => {
                let message = e.detail_message().unwrap_or_else(|| GENERIC_ERROR.to_string());
                self.phase = Phase::Error(message);
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient) {
        let Some(request) = self.begin_submit() else {
            return;
        };
        let result = api.forgot_password(&request).await;
        self.finish_submit(result);
    }
}
