//! Ultimate Beneficial Owner declaration.

use leptos::prelude::*;

use crate::components::section_page::SectionPage;

#[component]
pub fn UboDeclarationPage() -> impl IntoView {
    view! {
        <SectionPage
            title="UBO Declaration"
            lead="Ultimate Beneficial Owner Declaration"
            card_title="UBO Information"
            card_body="Please provide information about ultimate beneficial owners."
        />
    }
}
