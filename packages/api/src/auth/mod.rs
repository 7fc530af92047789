//! Account endpoints: signup, login, and password recovery.

use reqwest::Method;
use serde::{Deserialize, Serialize};
use store::UserInfo;

use crate::{ApiClient, ApiError};

/// Body of `POST /auth/signup`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct SignupRequest {
    pub email: String,
    pub username: String,
    pub password: String,
}

/// Body of `POST /auth/login`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful `POST /auth/login` response.
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct LoginResponse {
    pub access_token: String,
    pub user: UserInfo,
}

/// Body of `POST /auth/forgot-password`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ForgotPasswordRequest {
    pub email: String,
}

/// Body of `POST /auth/reset-password`.
///
/// `token` comes from the reset link's query string and is sent as `null`
/// when the link carried none; the server rejects that.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ResetPasswordRequest {
    pub token: Option<String>,
    pub new_password: String,
    pub confirm_password: String,
}

impl ApiClient {
    /// Register a new account.
    pub async fn signup(&self, request: &SignupRequest) -> Result<(), ApiError> {
        self.request_empty(Method::POST, "/auth/signup", Some(request), None)
            .await
    }

    /// Exchange credentials for an access token and the user's identity.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, ApiError> {
        self.request(Method::POST, "/auth/login", Some(request), None)
            .await
    }

    /// Ask the server to email a password reset link.
    pub async fn forgot_password(&self, request: &ForgotPasswordRequest) -> Result<(), ApiError> {
        self.request_empty(Method::POST, "/auth/forgot-password", Some(request), None)
            .await
    }

    /// Set a new password using the token from a reset link.
    pub async fn reset_password(&self, request: &ResetPasswordRequest) -> Result<(), ApiError> {
        self.request_empty(Method::POST, "/auth/reset-password", Some(request), None)
            .await
    }
}
