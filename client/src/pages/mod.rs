//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration and delegates shared chrome to
//! `components`. Protected pages assume `ProtectedRoute` already admitted the
//! session.

pub mod dashboard;
pub mod documents;
pub mod home;
pub mod kyc_profile;
pub mod login;
pub mod not_found;
pub mod pep_declaration;
pub mod ubo_declaration;
