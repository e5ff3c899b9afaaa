//! Identity DTOs exchanged with the authentication service.
//!
//! DESIGN
//! ======
//! `User` mirrors the identity payload a real onboarding backend would return,
//! so swapping the mock authenticator for an HTTP one keeps serde shapes stable.
//! `AuthToken` is opaque and never printed.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// An authenticated customer identity.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Numeric customer identifier.
    pub id: u64,
    /// Given name, shown in the navigation greeting.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Login email address.
    pub email: String,
}

impl User {
    /// Name used in "Hello, ..." greetings; falls back to `"User"` when blank.
    #[must_use]
    pub fn greeting_name(&self) -> &str {
        let name = self.first_name.trim();
        if name.is_empty() { "User" } else { name }
    }
}

/// Opaque bearer credential issued on successful login.
///
/// Placeholder for a real token: it is stored in the session but never
/// validated or sent anywhere.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AuthToken(String);

impl AuthToken {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AuthToken(<redacted>)")
    }
}

/// Credential pair collected by the login form.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    /// Build credentials from raw form input.
    ///
    /// The email is trimmed; the password is taken verbatim.
    ///
    /// # Errors
    ///
    /// Returns a user-facing message when either field is empty.
    pub fn from_form(email: &str, password: &str) -> Result<Self, &'static str> {
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            return Err("Enter both email address and password.");
        }
        Ok(Self { email: email.to_owned(), password: password.to_owned() })
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Successful authentication result: who logged in and their credential.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthGrant {
    pub user: User,
    pub token: AuthToken,
}
