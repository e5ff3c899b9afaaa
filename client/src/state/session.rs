//! Session state machine for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! A single `RwSignal<Session>` is provided at the app root. The route guard
//! and navigation shell read it; only [`SessionAction`]s mutate it.
//!
//! DESIGN
//! ======
//! Every sign-in attempt is stamped with an [`AttemptId`]. Success and failure
//! carry the id they answer and are dropped as [`Transition::Stale`] unless
//! that attempt is still in flight, so a resolution that lands after a logout
//! or a newer attempt cannot resurrect an old session.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::types::{AuthToken, User};

/// Identifies one sign-in attempt. Only [`Session::login_start`] mints these.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct AttemptId(u64);

/// The closed set of session transitions.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionAction {
    LoginStarted,
    LoginSucceeded { attempt: AttemptId, user: User, token: AuthToken },
    LoginFailed { attempt: AttemptId, message: String },
    LoggedOut,
    ErrorCleared,
}

impl SessionAction {
    fn label(&self) -> &'static str {
        match self {
            Self::LoginStarted => "login_started",
            Self::LoginSucceeded { .. } => "login_succeeded",
            Self::LoginFailed { .. } => "login_failed",
            Self::LoggedOut => "logged_out",
            Self::ErrorCleared => "error_cleared",
        }
    }
}

/// Result of applying an action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transition {
    Applied,
    /// The action answered an attempt that is no longer in flight.
    Stale,
}

/// Mutually exclusive views of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionPhase {
    Anonymous,
    Loading,
    Authenticated,
    Failed,
}

/// Authentication state. Starts anonymous; not persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    is_authenticated: bool,
    user: Option<User>,
    token: Option<AuthToken>,
    loading: bool,
    error: Option<String>,
    epoch: u64,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.is_authenticated
    }

    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    #[must_use]
    pub fn token(&self) -> Option<&AuthToken> {
        self.token.as_ref()
    }

    #[must_use]
    pub fn loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn phase(&self) -> SessionPhase {
        if self.loading {
            SessionPhase::Loading
        } else if self.is_authenticated {
            SessionPhase::Authenticated
        } else if self.error.is_some() {
            SessionPhase::Failed
        } else {
            SessionPhase::Anonymous
        }
    }

    /// Whether the field combination is one the transitions can produce.
    #[must_use]
    pub fn holds_invariant(&self) -> bool {
        let identity_matches_flag = if self.is_authenticated {
            self.user.is_some() && self.token.is_some()
        } else {
            self.user.is_none() && self.token.is_none()
        };
        let error_only_when_idle = !self.loading || self.error.is_none();
        let error_only_when_signed_out = !self.is_authenticated || self.error.is_none();
        identity_matches_flag && error_only_when_idle && error_only_when_signed_out
    }

    /// Apply one transition.
    ///
    /// # Panics
    ///
    /// Panics if a `LoginSucceeded` carries an empty token, whether or not its
    /// attempt is still in flight. That is a caller bug, not a user-facing failure.
    pub fn apply(&mut self, action: SessionAction) -> Transition {
        let label = action.label();
        let transition = match action {
            SessionAction::LoginStarted => {
                self.epoch += 1;
                self.loading = true;
                self.error = None;
                Transition::Applied
            }
            SessionAction::LoginSucceeded { attempt, user, token } => {
                assert!(!token.is_empty(), "login success requires a non-empty token");
                if !self.is_in_flight(attempt) {
                    return self.stale(label, attempt);
                }
                self.loading = false;
                self.is_authenticated = true;
                self.user = Some(user);
                self.token = Some(token);
                self.error = None;
                Transition::Applied
            }
            SessionAction::LoginFailed { attempt, message } => {
                if !self.is_in_flight(attempt) {
                    return self.stale(label, attempt);
                }
                self.loading = false;
                self.clear_identity();
                self.error = Some(message);
                Transition::Applied
            }
            SessionAction::LoggedOut => {
                // Retire any in-flight attempt so its late resolution is dropped.
                self.epoch += 1;
                self.loading = false;
                self.clear_identity();
                self.error = None;
                Transition::Applied
            }
            SessionAction::ErrorCleared => {
                self.error = None;
                Transition::Applied
            }
        };

        debug_assert!(self.holds_invariant(), "session invariant violated after {label}");
        log::debug!("session {label} -> {:?}", self.phase());
        transition
    }

    /// Begin a sign-in attempt and return its id.
    pub fn login_start(&mut self) -> AttemptId {
        self.apply(SessionAction::LoginStarted);
        AttemptId(self.epoch)
    }

    pub fn login_success(&mut self, attempt: AttemptId, user: User, token: AuthToken) -> Transition {
        self.apply(SessionAction::LoginSucceeded { attempt, user, token })
    }

    pub fn login_failure(&mut self, attempt: AttemptId, message: impl Into<String>) -> Transition {
        self.apply(SessionAction::LoginFailed { attempt, message: message.into() })
    }

    pub fn logout(&mut self) {
        self.apply(SessionAction::LoggedOut);
    }

    pub fn clear_error(&mut self) {
        self.apply(SessionAction::ErrorCleared);
    }

    fn is_in_flight(&self, attempt: AttemptId) -> bool {
        self.loading && attempt.0 == self.epoch
    }

    fn clear_identity(&mut self) {
        self.is_authenticated = false;
        self.user = None;
        self.token = None;
    }

    fn stale(&self, label: &str, attempt: AttemptId) -> Transition {
        log::debug!("session {label} ignored: attempt {} is not in flight (current {})", attempt.0, self.epoch);
        Transition::Stale
    }
}

/// Owner of the single session instance.
///
/// Implemented for the context signal; the login flow is written against this
/// trait so it runs without a reactive runtime in tests.
pub trait SessionCell {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R;

    fn dispatch(&self, action: SessionAction) -> Transition {
        self.with_session(|session| session.apply(action))
    }
}

impl SessionCell for RwSignal<Session> {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        let mut guard = self.write();
        f(&mut *guard)
    }
}

#[cfg(test)]
impl SessionCell for std::cell::RefCell<Session> {
    fn with_session<R>(&self, f: impl FnOnce(&mut Session) -> R) -> R {
        f(&mut *self.borrow_mut())
    }
}
