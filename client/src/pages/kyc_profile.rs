use leptos::prelude::*;

use crate::components::section_page::SectionPage;

#[component]
pub fn KycProfilePage() -> impl IntoView {
    view! {
        <SectionPage
            title="KYC Profile"
            lead="Complete your KYC profile information."
            card_title="Personal Information"
            card_body="Please provide your personal details for verification."
        />
    }
}
