//! Dashboard: KYC status summary and shortcuts into each onboarding section.

use leptos::prelude::*;

use crate::components::header::BRAND_NAME;
use crate::routes::{AppRoute, MEMBER_NAV};
use crate::state::session::Session;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let signed_in_as = move || session.with(|s| s.user().map(|user| user.email.clone()).unwrap_or_default());

    let sections = MEMBER_NAV
        .into_iter()
        .filter(|route| *route != AppRoute::Dashboard)
        .map(|route| {
            view! {
                <li class="dashboard-links__item">
                    <a href=route.path()>{route.label()}</a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="container">
            <div class="dashboard-layout">
                <div class="dashboard-content">
                    <h1>"Dashboard"</h1>
                    <p>{format!("Welcome to your {BRAND_NAME} dashboard.")}</p>
                    <p class="dashboard-content__identity">"Signed in as " <strong>{signed_in_as}</strong></p>
                    <div class="card">
                        <h2>"KYC Status"</h2>
                        <p>"Your KYC verification is in progress."</p>
                    </div>
                    <div class="card">
                        <h2>"Next Steps"</h2>
                        <ul class="dashboard-links">{sections}</ul>
                    </div>
                </div>
            </div>
        </div>
    }
}
