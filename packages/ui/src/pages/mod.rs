//! # Page controllers
//!
//! One state machine per screen, free of any Dioxus types so the behavior can
//! be driven directly from tests. Views in [`crate::views`] hold a controller
//! in a signal and forward user events to it.
//!
//! Every controller moves through [`Phase`]: `Idle → Loading → Success | Error`.
//! Work that talks to the backend is split in two so no borrow of the
//! controller is held across an `.await`:
//!
//! - `begin_*` validates input, refuses to start while a request is already
//!   outstanding, switches to `Loading`, and hands back what to send.
//! - `finish_*` applies the response and returns the [`Destination`] to
//!   navigate to, if any.
//!
//! Each controller also offers an `async` method running both halves against
//! an [`api::ApiClient`].
//!
//! Pages that need a session and find none send the user to the login page
//! through [`Step::Redirect`].

use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::{AbortHandle, AbortRegistration, Abortable};
use store::SessionStore;

pub mod forgot_password;
pub mod login;
pub mod reset_password;
pub mod signup;
pub mod task_detail;
pub mod task_form;
pub mod task_list;

pub use forgot_password::ForgotPasswordForm;
pub use login::LoginForm;
pub use reset_password::ResetPasswordForm;
pub use signup::SignupForm;
pub use task_detail::TaskDetailPage;
pub use task_form::{CreateTaskForm, TaskDraft, UpdateTaskForm};
pub use task_list::{filter_tasks, TaskListPage};

/// Request lifecycle of a page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Phase {
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl Phase {
    pub fn is_loading(&self) -> bool {
        matches!(self, Phase::Loading)
    }

    /// Message to show, when in the error state.
    pub fn error(&self) -> Option<&str> {
        match self {
            Phase::Error(message) => Some(message),
            _ => None,
        }
    }
}

/// Where a page wants to go next. Only the targets a controller actually
/// navigates to are listed; views map each onto a [`crate::Route`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Destination {
    Login,
    Tasks,
}

impl Destination {
    /// Literal client-side path.
    pub fn path(&self) -> &'static str {
        match self {
            Destination::Login => "/login",
            Destination::Tasks => "/tasks",
        }
    }
}

/// Outcome of a `begin_*` call on a page that needs a session.
#[derive(Debug, Clone, PartialEq)]
pub enum Step<T> {
    /// Go ahead and send this.
    Send(T),
    /// No session; navigate instead.
    Redirect(Destination),
    /// Nothing to send: a request is in flight or validation failed.
    Blocked,
}

/// A payload paired with the bearer token it must be sent with.
#[derive(Debug, Clone, PartialEq)]
pub struct Authorized<T> {
    pub token: String,
    pub payload: T,
}

/// Bearer token of the current session, or a redirect to the login page.
pub(crate) fn session_token(session: &SessionStore) -> Result<String, Destination> {
    session.token().ok_or_else(|| {
        tracing::info!("no active session, redirecting to login");
        Destination::Login
    })
}

/// Empty-field check matching an HTML `required` attribute: whitespace counts
/// as a value.
pub(crate) fn require(label: &str, value: &str) -> Result<(), String> {
    if value.is_empty() {
        Err(format!("{label} is required"))
    } else {
        Ok(())
    }
}

/// In-flight work owned by one page.
///
/// Futures wrapped with [`scoped`](PageTasks::scoped) or
/// [`guard`](PageTasks::guard) stop at their next poll once
/// [`exit`](PageTasks::exit) is called, so a response arriving after the user
/// left the page is dropped instead of applied.
#[derive(Clone, Default)]
pub struct PageTasks {
    handles: Arc<Mutex<Vec<AbortHandle>>>,
}

impl PageTasks {
    pub fn new() -> Self {
        Self::default()
    }

    fn register(&self) -> AbortRegistration {
        let (handle, registration) = AbortHandle::new_pair();
        let mut handles = self.handles.lock().unwrap_or_else(|e| e.into_inner());
        handles.retain(|h| !h.is_aborted());
        handles.push(handle);
        registration
    }

    /// Wrap `fut`; resolves to `None` if the page is exited first.
    pub fn guard<F: Future>(&self, fut: F) -> impl Future<Output = Option<F::Output>> {
        let registration = self.register();
        async move { Abortable::new(fut, registration).await.ok() }
    }

    /// Wrap a unit future for handing to a spawner.
    pub fn scoped<F: Future<Output = ()>>(&self, fut: F) -> impl Future<Output = ()> {
        let guarded = self.guard(fut);
        async move {
            let _ = guarded.await;
        }
    }

    /// Abort everything started through this page.
    pub fn exit(&self) {
        let handles = std::mem::take(&mut *self.handles.lock().unwrap_or_else(|e| e.into_inner()));
        if !handles.is_empty() {
            tracing::debug!(count = handles.len(), "cancelling page work");
        }
        for handle in handles {
            handle.abort();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_destination_paths() {
        assert_eq!(Destination::Login.path(), "/login");
        assert_eq!(Destination::Tasks.path(), "/tasks");
    }

    #[test]
    fn test_require() {
        assert_eq!(require("Title", "Milk"), Ok(()));
        assert_eq!(require("Title", ""), Err("Title is required".to_string()));
        assert_eq!(require("Password", "   "), Ok(()));
    }

    #[test]
    fn test_phase_helpers() {
        assert!(Phase::Loading.is_loading());
        assert!(!Phase::Idle.is_loading());
        assert_eq!(Phase::Error("boom".into()).error(), Some("boom"));
        assert_eq!(Phase::Success.error(), None);
    }

    #[tokio::test]
    async fn test_guard_completes_while_page_is_open() {
        let tasks = PageTasks::new();
        assert_eq!(tasks.guard(async { 5 }).await, Some(5));
    }

    #[tokio::test]
    async fn test_exit_cancels_pending_work() {
        let tasks = PageTasks::new();
        let (tx, rx) = futures::channel::oneshot::channel::<u32>();

        let pending = tasks.guard(async move { rx.await.ok() });
        tasks.exit();
        let _ = tx.send(1);

        assert_eq!(pending.await, None);
    }

    #[tokio::test]
    async fn test_scoped_future_does_not_run_after_exit() {
        let tasks = PageTasks::new();
        let ran = Arc::new(Mutex::new(false));

        let flag = ran.clone();
        let work = tasks.scoped(async move {
            *flag.lock().unwrap() = true;
        });
        tasks.exit();
        work.await;

        assert!(!*ran.lock().unwrap());
    }
}
