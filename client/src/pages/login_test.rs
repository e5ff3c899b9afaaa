use super::*;

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(false), "Sign In");
    assert_eq!(submit_label(true), "Signing In...");
}

#[test]
fn visible_error_prefers_form_message() {
    assert_eq!(
        visible_error(Some("Enter both email address and password."), Some("Invalid credentials. Please try again.")),
        Some("Enter both email address and password.".to_owned())
    );
}

#[test]
fn visible_error_falls_back_to_session_error() {
    assert_eq!(
        visible_error(None, Some("Invalid credentials. Please try again.")),
        Some("Invalid credentials. Please try again.".to_owned())
    );
    assert_eq!(visible_error(None, None), None);
}
