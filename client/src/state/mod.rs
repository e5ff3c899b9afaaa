//! Client-side application state.
//!
//! DESIGN
//! ======
//! `session` owns the authentication state machine; `login` drives it through
//! a full sign-in attempt. Pages and components read the session from Leptos
//! context and never write its fields directly.

pub mod login;
pub mod session;
