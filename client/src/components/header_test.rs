use super::*;
use crate::net::types::{AuthToken, User};

fn session_for(first_name: &str) -> Session {
    let mut session = Session::new();
    let attempt = session.login_start();
    session.login_success(
        attempt,
        User {
            id: 1,
            first_name: first_name.to_owned(),
            last_name: "Doe".to_owned(),
            email: "a@b.com".to_owned(),
        },
        AuthToken::new("mock-jwt-token"),
    );
    session
}

#[test]
fn greeting_uses_first_name() {
    assert_eq!(greeting(&session_for("John")), "Hello, John");
}

#[test]
fn greeting_falls_back_to_user() {
    assert_eq!(greeting(&session_for("")), "Hello, User");
    assert_eq!(greeting(&Session::new()), "Hello, User");
}

#[test]
fn is_active_matches_exact_route() {
    assert!(is_active(AppRoute::Dashboard, "/dashboard"));
    assert!(is_active(AppRoute::Dashboard, "/dashboard/"));
    assert!(!is_active(AppRoute::Dashboard, "/documents"));
    assert!(is_active(AppRoute::Home, "/"));
    assert!(!is_active(AppRoute::Home, "/login"));
}
