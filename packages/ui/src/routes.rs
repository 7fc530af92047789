use dioxus::prelude::*;

use crate::pages::Destination;
use crate::views::{
    AppLayout, CreateTask, ForgotPassword, Home, Login, ResetPassword, Signup, TaskDetail, Tasks,
    UpdateTask,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppLayout)]
        #[route("/")]
        Home {},
        #[route("/login")]
        Login {},
        #[route("/signup")]
        Signup {},
        #[route("/tasks")]
        Tasks {},
        // Must come before /tasks/:task_id
        #[route("/tasks/create")]
        CreateTask {},
        #[route("/tasks/:task_id")]
        TaskDetail { task_id: String },
        #[route("/tasks/:task_id/edit")]
        UpdateTask { task_id: String },
        #[route("/forgot-password")]
        ForgotPassword {},
        #[route("/reset-password?:token")]
        ResetPassword { token: String },
}

impl From<Destination> for Route {
    fn from(destination: Destination) -> Self {
        match destination {
            Destination::Login => Route::Login {},
            Destination::Tasks => Route::Tasks {},
        }
    }
}
