//! This crate contains all shared UI for the workspace: page controllers,
//! session context, views and the route table.

pub mod pages;

pub mod views;

mod routes;
pub use routes::Route;

mod auth;
pub use auth::{use_api, use_session, LogoutButton, SessionProvider};
