//! Route wrapper that only renders its children for a signed-in session.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps every protected page in `app.rs`. The guard decision is a memo over
//! both the router location and the session, so it re-runs on each navigation
//! and immediately after a logout.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

use crate::routes::is_protected_path;
use crate::state::session::Session;
use crate::util::auth::{GuardDecision, guard};

/// Guard decision that re-evaluates whenever the path or the session changes.
pub fn guard_decision(pathname: Signal<String>, session: RwSignal<Session>) -> Memo<GuardDecision> {
    Memo::new(move |_| {
        let path = pathname.get();
        session.with(|s| guard(s, &path))
    })
}

/// Login URL to replace the current entry with, if the guard refused.
///
/// Nothing is returned once the browser is already off the protected route
/// (e.g. the logout link heading to "/").
pub fn redirect_target(decision: &GuardDecision, current_path: &str) -> Option<String> {
    match decision {
        GuardDecision::Redirect(redirect) if is_protected_path(current_path) => Some(redirect.href()),
        _ => None,
    }
}

#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let location = use_location();
    let navigate = use_navigate();

    let decision = guard_decision(location.pathname.into(), session);

    #[cfg(feature = "ssr")]
    if let GuardDecision::Redirect(redirect) = decision.get_untracked() {
        leptos_axum::redirect(&redirect.href());
    }

    Effect::new(move |_| {
        let target = decision.with(|d| redirect_target(d, &location.pathname.get_untracked()));
        if let Some(href) = target {
            navigate(&href, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });

    view! { <Show when=move || decision.with(GuardDecision::permits)>{children()}</Show> }
}
