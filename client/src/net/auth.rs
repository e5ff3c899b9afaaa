//! Authentication service boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! The login flow talks to the outside world only through [`Authenticator`].
//! The shipped implementation is [`MockAuthenticator`], which waits a fixed
//! delay and always succeeds. A real implementation would make a network call
//! and own its retry/timeout policy; the login flow adds neither.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use std::future::Future;

use super::types::{AuthGrant, AuthToken, Credentials, User};

/// Simulated round-trip latency of the mock service.
pub const DEFAULT_MOCK_DELAY_MS: u32 = 1_000;

const MOCK_TOKEN: &str = "mock-jwt-token";

/// Failure reported by an authentication service.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("credentials rejected")]
    Rejected,
    #[error("authentication service unavailable: {0}")]
    Unavailable(String),
}

/// External authentication collaborator.
///
/// Futures are not required to be `Send`: the client runs on the browser's
/// single-threaded event loop.
pub trait Authenticator {
    fn authenticate(&self, credentials: &Credentials) -> impl Future<Output = Result<AuthGrant, AuthError>>;
}

/// Stand-in service: fixed delay, then a canned identity for the submitted email.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MockAuthenticator {
    delay_ms: u32,
}

impl MockAuthenticator {
    #[must_use]
    pub fn with_delay_ms(delay_ms: u32) -> Self {
        Self { delay_ms }
    }

    #[must_use]
    pub fn delay_ms(&self) -> u32 {
        self.delay_ms
    }
}

impl Default for MockAuthenticator {
    fn default() -> Self {
        Self::with_delay_ms(DEFAULT_MOCK_DELAY_MS)
    }
}

impl Authenticator for MockAuthenticator {
    async fn authenticate(&self, credentials: &Credentials) -> Result<AuthGrant, AuthError> {
        #[cfg(feature = "hydrate")]
        gloo_timers::future::TimeoutFuture::new(self.delay_ms).await;

        Ok(mock_grant(&credentials.email))
    }
}

fn mock_grant(email: &str) -> AuthGrant {
    AuthGrant {
        user: User {
            id: 1,
            first_name: "John".to_owned(),
            last_name: "Doe".to_owned(),
            email: email.to_owned(),
        },
        token: AuthToken::new(MOCK_TOKEN),
    }
}
