//! # API crate: REST client for the Taskpad backend
//!
//! This crate is the only place the frontends talk HTTP. It wraps a
//! [`reqwest::Client`] in [`ApiClient`], which knows the configured base URL and
//! attaches `Authorization: Bearer <token>` when a caller supplies a token.
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`auth`] | Signup, login, forgot/reset password request and response bodies |
//! | [`tasks`] | Task create/update bodies and the CRUD calls |
//! | [`error`] | [`ApiError`] and the server `detail` shape ([`ErrorDetail`]) |
//!
//! ## Endpoints
//!
//! | Method | Path | Auth | Call |
//! |--------|------|------|------|
//! | POST | `/auth/signup` | – | [`ApiClient::signup`] |
//! | POST | `/auth/login` | – | [`ApiClient::login`] |
//! | POST | `/auth/forgot-password` | – | [`ApiClient::forgot_password`] |
//! | POST | `/auth/reset-password` | – | [`ApiClient::reset_password`] |
//! | GET | `/tasks` | bearer | [`ApiClient::list_tasks`] |
//! | POST | `/tasks` | bearer | [`ApiClient::create_task`] |
//! | GET | `/tasks/:id` | bearer | [`ApiClient::get_task`] |
//! | PUT | `/tasks/:id` | bearer | [`ApiClient::update_task`] |
//! | DELETE | `/tasks/:id` | bearer | [`ApiClient::delete_task`] |
//!
//! ## Failures
//!
//! Any non-2xx response becomes [`ApiError::Rejected`] carrying the optional
//! server detail; anything that never produced a usable response becomes
//! [`ApiError::Transport`]. There is no retry and no timeout beyond the
//! transport default.

mod client;
pub mod auth;
pub mod error;
pub mod tasks;

pub use auth::{ForgotPasswordRequest, LoginRequest, LoginResponse, ResetPasswordRequest, SignupRequest};
pub use client::ApiClient;
pub use error::{ApiError, ErrorDetail, UNEXPECTED_ERROR};
pub use tasks::{NewTask, TaskUpdate};

pub use reqwest::Method;
pub use store::{Category, Task, UserInfo};
