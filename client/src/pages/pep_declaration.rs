//! Politically Exposed Person declaration.

use leptos::prelude::*;

use crate::components::section_page::SectionPage;

#[component]
pub fn PepDeclarationPage() -> impl IntoView {
    view! {
        <SectionPage
            title="PEP Declaration"
            lead="Politically Exposed Person Declaration"
            card_title="PEP Status"
            card_body="Please declare your PEP status for compliance purposes."
        />
    }
}
