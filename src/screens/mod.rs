pub mod candidates;
pub mod dashboard;
pub mod jobs;
pub mod profile;

use crate::services::auth_service::Session;

/// The route table of the dashboard shell. Everything except `Login` sits
/// behind the auth gate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
    Jobs,
    Candidates,
    Profile,
}

impl Route {
    pub fn requires_auth(&self) -> bool {
        !matches!(self, Route::Login)
    }
}

/// Redirects unauthenticated access to the login page; authenticated
/// navigation passes through untouched.
pub fn guard(route: Route, session: Option<&Session>) -> Route {
    if route.requires_auth() && session.is_none() {
        tracing::debug!(?route, "redirecting unauthenticated navigation to login");
        Route::Login
    } else {
        route
    }
}

/// Transient toast shown after an action; terminal per action, never logged
/// beyond tracing, never retried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Success(String),
    Error(String),
}

impl Notification {
    pub fn text(&self) -> &str {
        match self {
            Notification::Success(msg) | Notification::Error(msg) => msg,
        }
    }
}
