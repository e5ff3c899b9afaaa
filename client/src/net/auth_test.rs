use futures::executor::block_on;

use super::*;

fn creds(email: &str) -> Credentials {
    Credentials { email: email.to_owned(), password: "pw".to_owned() }
}

#[test]
fn mock_default_delay_is_one_second() {
    assert_eq!(MockAuthenticator::default().delay_ms(), 1_000);
}

#[test]
fn mock_echoes_submitted_email() {
    let grant = block_on(MockAuthenticator::with_delay_ms(0).authenticate(&creds("a@b.com"))).unwrap();
    assert_eq!(grant.user.email, "a@b.com");
    assert_eq!(grant.user.first_name, "John");
    assert_eq!(grant.user.last_name, "Doe");
    assert_eq!(grant.user.id, 1);
}

#[test]
fn mock_issues_non_empty_token() {
    let grant = block_on(MockAuthenticator::default().authenticate(&creds("x@y.z"))).unwrap();
    assert!(!grant.token.is_empty());
    assert_eq!(grant.token.as_str(), "mock-jwt-token");
}

#[test]
fn auth_error_messages() {
    assert_eq!(AuthError::Rejected.to_string(), "credentials rejected");
    assert_eq!(
        AuthError::Unavailable("timeout".to_owned()).to_string(),
        "authentication service unavailable: timeout"
    );
}
