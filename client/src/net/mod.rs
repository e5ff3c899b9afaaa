//! Networking boundary for the onboarding client.
//!
//! SYSTEM CONTEXT
//! ==============
//! `auth` abstracts the external authentication service behind a trait so the
//! login flow can run against the mock in the browser and against fakes in
//! tests. `types` defines the identity records that cross that boundary.

pub mod auth;
pub mod types;
