//! Shared layout for the single-card onboarding section pages.

use leptos::prelude::*;

/// Heading, lead paragraph, and one content card.
#[component]
pub fn SectionPage(
    title: &'static str,
    lead: &'static str,
    card_title: &'static str,
    card_body: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="container section-page">
            <h1>{title}</h1>
            <p class="section-page__lead">{lead}</p>
            <div class="card">
                <h2>{card_title}</h2>
                <p>{card_body}</p>
                {children.map(|children| children())}
            </div>
        </div>
    }
}
