//! Login flow: drives the session through one sign-in attempt.
//!
//! SYSTEM CONTEXT
//! ==============
//! Invoked by the login page with form credentials and the return target the
//! route guard recorded. The page owns navigation; this module only reports
//! where to go.
//!
//! ERROR HANDLING
//! ==============
//! Any authentication error collapses to [`LOGIN_FAILED_MESSAGE`] in the
//! session. The underlying cause is logged, never shown.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::auth::Authenticator;
use crate::net::types::Credentials;
use crate::state::session::{Session, SessionAction, SessionCell, Transition};
use crate::util::auth::sanitize_return_path;

/// The only failure text a visitor ever sees.
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid credentials. Please try again.";

/// How a sign-in attempt ended.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LoginOutcome {
    /// Signed in; navigate to `navigate_to`, replacing the login history entry.
    Authenticated { navigate_to: String },
    /// The service refused; the session now carries the failure message.
    Rejected,
    /// A logout or newer attempt overtook this one; nothing to do.
    Superseded,
}

/// Run one attempt end to end.
///
/// The caller must not start a second attempt while `loading` is set; the
/// session tolerates it but only the newest attempt can resolve.
pub async fn run_login<S, A>(
    session: &S,
    authenticator: &A,
    credentials: Credentials,
    return_to: Option<&str>,
) -> LoginOutcome
where
    S: SessionCell,
    A: Authenticator,
{
    let attempt = session.with_session(Session::login_start);
    log::debug!("login attempt {attempt:?} started");

    match authenticator.authenticate(&credentials).await {
        Ok(grant) => {
            let action = SessionAction::LoginSucceeded { attempt, user: grant.user, token: grant.token };
            match session.dispatch(action) {
                Transition::Applied => {
                    let navigate_to = sanitize_return_path(return_to).to_owned();
                    log::info!("login succeeded, continuing to {navigate_to}");
                    LoginOutcome::Authenticated { navigate_to }
                }
                Transition::Stale => LoginOutcome::Superseded,
            }
        }
        Err(err) => {
            log::warn!("login rejected: {err}");
            let action = SessionAction::LoginFailed { attempt, message: LOGIN_FAILED_MESSAGE.to_owned() };
            match session.dispatch(action) {
                Transition::Applied => LoginOutcome::Rejected,
                Transition::Stale => LoginOutcome::Superseded,
            }
        }
    }
}
