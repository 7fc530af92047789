//! Reset-password form, reached from the emailed link `/reset-password?token=...`.
//!
//! The token is taken from the link as-is. A link without one still submits
//! (the token goes out as `null`) and the server rejects it.

use std::time::Duration;

use api::{ApiClient, ApiError, ResetPasswordRequest};

use super::{require, Destination, Phase};

pub const PASSWORD_RESET: &str = "Password has been reset successfully. You can now log in.";
pub const PASSWORDS_DIFFER: &str = "Passwords do not match.";
const GENERIC_ERROR: &str = "An error occurred.";

/// Pause between the success notice and the redirect to login.
pub const REDIRECT_DELAY: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResetPasswordForm {
    pub token: Option<String>,
    pub password: String,
    pub confirm_password: String,
    pub phase: Phase,
    pub message: Option<String>,
}

impl ResetPasswordForm {
    /// Build the form from the link's `token` query value; blank means absent.
    pub fn new(token: Option<String>) -> Self {
        Self {
            token: token.filter(|t| !t.is_empty()),
            ..Self::default()
        }
    }

    pub fn is_busy(&self) -> bool {
        self.phase.is_loading()
    }

    pub fn begin_submit(&mut self) -> Option<ResetPasswordRequest> {
        if self.is_busy() {
            return None;
        }
        let check = require("New password", &self.password)
            .and_then(|_| require("Password confirmation", &self.confirm_password));
        if let Err(message) = check {
            self.phase = Phase::Error(message);
            return None;
        }
        if self.password != self.confirm_password {
            self.phase = Phase::Error(PASSWORDS_DIFFER.to_string());
            return None;
        }
        self.message = None;
        self.phase = Phase::Loading;
        Some(ResetPasswordRequest {
            token: self.token.clone(),
            new_password: self.password.clone(),
            confirm_password: self.confirm_password.clone(),
        })
    }

    /// On success the caller should wait [`REDIRECT_DELAY`] before navigating.
    pub fn finish_submit(&mut self, result: Result<(), ApiError>) -> Option<Destination> {
        match result {
            Ok(()) => {
                self.phase = Phase::Success;
                self.message = Some(PASSWORD_RESET.to_string());
                Some(Destination::Login)
            }
            Err(e) => {
                self.phase = Phase::Error(e.message_or(GENERIC_ERROR));
                None
            }
        }
    }

    pub async fn submit(&mut self, api: &ApiClient) -> Option<Destination> {
        let request = self.begin_submit()?;
        let result = api.reset_password(&request).await;
        self.finish_submit(result)
    }
}
