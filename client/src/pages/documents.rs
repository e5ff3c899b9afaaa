//! Verification document upload page.

use leptos::prelude::*;

use crate::components::section_page::SectionPage;

/// Documents typically requested during onboarding.
const REQUIRED_DOCUMENTS: [&str; 3] = ["Government-issued photo ID", "Proof of address", "Company registration extract"];

#[component]
pub fn DocumentsPage() -> impl IntoView {
    view! {
        <SectionPage
            title="Documents"
            lead="Upload and manage your verification documents"
            card_title="Required Documents"
            card_body="Please upload the required documents for verification."
        >
            <ul class="document-list">
                {REQUIRED_DOCUMENTS.into_iter().map(|doc| view! { <li>{doc}</li> }).collect::<Vec<_>>()}
            </ul>
        </SectionPage>
    }
}
