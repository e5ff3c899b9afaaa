//! Route guard and login return-target helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! `ProtectedRoute` calls [`guard`] on every navigation and session change.
//! The requested path rides along to the login page as the `from` query
//! parameter and comes back through [`sanitize_return_path`] before the login
//! flow navigates to it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::routes::AppRoute;
use crate::state::session::Session;

/// Query parameter carrying the post-login return target.
pub const RETURN_TO_PARAM: &str = "from";

/// Where a successful login lands when no usable return target was recorded.
pub const DEFAULT_RETURN_PATH: &str = AppRoute::Dashboard.path();

const MAX_RETURN_PATH_LEN: usize = 256;

/// Instruction to send the visitor to the login view.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LoginRedirect {
    pub to: &'static str,
    pub return_to: String,
}

impl LoginRedirect {
    /// Login URL with the return target attached.
    #[must_use]
    pub fn href(&self) -> String {
        login_href(&self.return_to)
    }
}

/// Outcome of evaluating the guard for one navigation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardDecision {
    Render { path: String },
    Redirect(LoginRedirect),
}

impl GuardDecision {
    #[must_use]
    pub fn permits(&self) -> bool {
        matches!(self, Self::Render { .. })
    }
}

/// Decide whether `requested_path` may render for `session`. Reads only.
#[must_use]
pub fn guard(session: &Session, requested_path: &str) -> GuardDecision {
    if session.is_authenticated() {
        GuardDecision::Render { path: requested_path.to_owned() }
    } else {
        GuardDecision::Redirect(LoginRedirect {
            to: AppRoute::Login.path(),
            return_to: requested_path.to_owned(),
        })
    }
}

/// Build `/login?from=<path>`; unusable targets are dropped.
#[must_use]
pub fn login_href(return_to: &str) -> String {
    if is_safe_return_path(return_to) {
        format!("{}?{RETURN_TO_PARAM}={return_to}", AppRoute::Login.path())
    } else {
        AppRoute::Login.path().to_owned()
    }
}

/// Accept only local route paths; everything else becomes [`DEFAULT_RETURN_PATH`].
#[must_use]
pub fn sanitize_return_path(raw: Option<&str>) -> &str {
    match raw {
        Some(path) if is_safe_return_path(path) => path,
        _ => DEFAULT_RETURN_PATH,
    }
}

fn is_safe_return_path(path: &str) -> bool {
    path.starts_with('/')
        && !path.starts_with("//")
        && path.len() <= MAX_RETURN_PATH_LEN
        && !path.contains("..")
        && path
            .bytes()
            .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'/' | b'-' | b'_' | b'.'))
        && AppRoute::from_path(path) != Some(AppRoute::Login)
}
