//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the page chrome (header, footer) and the route guard
//! wrapper while reading shared session state from Leptos context.

pub mod footer;
pub mod header;
pub mod protected_route;
pub mod section_page;
