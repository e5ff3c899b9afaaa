//! Site header: brand, session-aware navigation, and mobile menu.
//!
//! SYSTEM CONTEXT
//! ==============
//! Reads the session signal to pick between the public and member link sets.
//! Logging out is the only write, and it goes through `SessionAction`.

#[cfg(test)]
#[path = "header_test.rs"]
mod header_test;

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::routes::{AppRoute, nav_links};
use crate::state::session::{Session, SessionAction, SessionCell};

pub const BRAND_NAME: &str = "BTS Global Bank";
pub const BRAND_TAGLINE: &str = "be anywhere";

/// "Hello, <first name>" for the signed-in user.
pub fn greeting(session: &Session) -> String {
    let name = session.user().map_or("User", |user| user.greeting_name());
    format!("Hello, {name}")
}

/// Whether the link for `route` should be highlighted at `pathname`.
pub fn is_active(route: AppRoute, pathname: &str) -> bool {
    AppRoute::from_path(pathname) == Some(route)
}

/// Top navigation bar.
#[component]
pub fn Header() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let menu_open = RwSignal::new(false);

    let authenticated = move || session.with(Session::is_authenticated);
    let greeting_text = move || session.with(greeting);
    let close_menu = move |_: leptos::ev::MouseEvent| menu_open.set(false);

    // The link's href ("/") performs the navigation; this only resets state.
    let on_logout = move |_: leptos::ev::MouseEvent| {
        session.dispatch(SessionAction::LoggedOut);
        menu_open.set(false);
    };

    let links = move |link_class: &'static str| {
        nav_links(authenticated())
            .iter()
            .map(|&route| {
                view! {
                    <a
                        href=route.path()
                        class=link_class
                        class:active=move || is_active(route, &location.pathname.get())
                        on:click=close_menu
                    >
                        {route.label()}
                    </a>
                }
            })
            .collect::<Vec<_>>()
    };

    view! {
        <header class="header">
            <nav class="navbar">
                <div class="container">
                    <div class="navbar-content">
                        <a href=AppRoute::Home.path() class="navbar-brand" on:click=close_menu>
                            <span class="brand-logo" aria-hidden="true">"BTS"</span>
                            <span class="brand-text">
                                <span class="brand-name">{BRAND_NAME}</span>
                                <span class="brand-tagline">{BRAND_TAGLINE}</span>
                            </span>
                        </a>

                        <div class="navbar-nav desktop-nav">
                            {move || links("nav-link")}
                            <Show when=authenticated>
                                <div class="user-menu">
                                    <span class="user-greeting">{greeting_text}</span>
                                    <a href=AppRoute::Home.path() class="btn btn-outline btn-sm" on:click=on_logout>
                                        "Logout"
                                    </a>
                                </div>
                            </Show>
                        </div>

                        <button
                            class="mobile-menu-toggle"
                            aria-label="Toggle mobile menu"
                            aria-expanded=move || menu_open.get().to_string()
                            on:click=move |_| menu_open.update(|open| *open = !*open)
                        >
                            <span class="hamburger" class:active=move || menu_open.get()>
                                <span></span>
                                <span></span>
                                <span></span>
                            </span>
                        </button>
                    </div>

                    <div class="mobile-nav" class:active=move || menu_open.get()>
                        <Show when=authenticated>
                            <div class="mobile-user-info">
                                <span class="mobile-user-greeting">{greeting_text}</span>
                            </div>
                        </Show>
                        {move || links("mobile-nav-link")}
                        <Show when=authenticated>
                            <a href=AppRoute::Home.path() class="mobile-logout-btn" on:click=on_logout>
                                "Logout"
                            </a>
                        </Show>
                    </div>
                </div>
            </nav>
        </header>
    }
}
