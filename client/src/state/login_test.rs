use std::cell::{Cell, RefCell};
use std::future::Future;

use futures::executor::block_on;

use super::*;
use crate::net::auth::{AuthError, MockAuthenticator};
use crate::net::types::{AuthGrant, AuthToken, User};

// =============================================================
// Fakes
// =============================================================

struct Rejecting;

impl Authenticator for Rejecting {
    fn authenticate(&self, _credentials: &Credentials) -> impl Future<Output = Result<AuthGrant, AuthError>> {
        async { Err(AuthError::Unavailable("connection reset".to_owned())) }
    }
}

/// Observes the session mid-flight, then optionally logs out before resolving.
struct Probe<'a> {
    session: &'a RefCell<Session>,
    saw_loading: Cell<bool>,
    logout_first: bool,
}

impl Authenticator for Probe<'_> {
    fn authenticate(&self, credentials: &Credentials) -> impl Future<Output = Result<AuthGrant, AuthError>> {
        self.saw_loading.set(self.session.borrow().loading());
        if self.logout_first {
            self.session.borrow_mut().logout();
        }
        let grant = AuthGrant {
            user: User {
                id: 9,
                first_name: "Late".to_owned(),
                last_name: "Arrival".to_owned(),
                email: credentials.email.clone(),
            },
            token: AuthToken::new("t"),
        };
        async move { Ok(grant) }
    }
}

fn creds() -> Credentials {
    Credentials::from_form("a@b.com", "pw").unwrap()
}

// =============================================================
// Success
// =============================================================

#[test]
fn successful_login_authenticates_and_defaults_to_dashboard() {
    let session = RefCell::new(Session::new());
    let outcome = block_on(run_login(&session, &MockAuthenticator::with_delay_ms(0), creds(), None));

    assert_eq!(outcome, LoginOutcome::Authenticated { navigate_to: "/dashboard".to_owned() });
    let session = session.borrow();
    assert!(session.is_authenticated());
    assert!(!session.loading());
    assert_eq!(session.user().map(|u| u.email.as_str()), Some("a@b.com"));
}

#[test]
fn successful_login_returns_to_recorded_target() {
    let session = RefCell::new(Session::new());
    let outcome = block_on(run_login(
        &session,
        &MockAuthenticator::with_delay_ms(0),
        creds(),
        Some("/ubo-declaration"),
    ));
    assert_eq!(outcome, LoginOutcome::Authenticated { navigate_to: "/ubo-declaration".to_owned() });
}

#[test]
fn unsafe_return_target_falls_back_to_dashboard() {
    let session = RefCell::new(Session::new());
    let outcome = block_on(run_login(
        &session,
        &MockAuthenticator::with_delay_ms(0),
        creds(),
        Some("//phish.example"),
    ));
    assert_eq!(outcome, LoginOutcome::Authenticated { navigate_to: "/dashboard".to_owned() });
}

#[test]
fn session_is_loading_while_authentication_is_pending() {
    let session = RefCell::new(Session::new());
    let probe = Probe { session: &session, saw_loading: Cell::new(false), logout_first: false };
    block_on(run_login(&session, &probe, creds(), None));
    assert!(probe.saw_loading.get());
    assert!(!session.borrow().loading());
}

// =============================================================
// Failure
// =============================================================

#[test]
fn rejected_login_sets_fixed_message() {
    let session = RefCell::new(Session::new());
    let outcome = block_on(run_login(&session, &Rejecting, creds(), Some("/documents")));

    assert_eq!(outcome, LoginOutcome::Rejected);
    let session = session.borrow();
    assert!(!session.is_authenticated());
    assert!(!session.loading());
    assert_eq!(session.error(), Some("Invalid credentials. Please try again."));
    assert!(session.user().is_none());
    assert!(session.token().is_none());
}

#[test]
fn retry_after_rejection_clears_previous_error() {
    let session = RefCell::new(Session::new());
    block_on(run_login(&session, &Rejecting, creds(), None));
    block_on(run_login(&session, &MockAuthenticator::with_delay_ms(0), creds(), None));
    assert!(session.borrow().error().is_none());
    assert!(session.borrow().is_authenticated());
}

// =============================================================
// Stale resolution
// =============================================================

#[test]
fn logout_during_attempt_supersedes_it() {
    let session = RefCell::new(Session::new());
    let probe = Probe { session: &session, saw_loading: Cell::new(false), logout_first: true };
    let outcome = block_on(run_login(&session, &probe, creds(), None));

    assert_eq!(outcome, LoginOutcome::Superseded);
    let session = session.borrow();
    assert!(!session.is_authenticated());
    assert!(!session.loading());
    assert!(session.user().is_none());
}
