//! Site footer with service links and build metadata.

use leptos::prelude::*;

use crate::components::header::{BRAND_NAME, BRAND_TAGLINE};

const SERVICES: [(&str, &str); 4] = [
    ("KYC Verification", "#kyc"),
    ("UBO Declaration", "#ubo"),
    ("PEP Screening", "#pep"),
    ("Compliance", "#compliance"),
];

const SUPPORT: [(&str, &str); 4] = [
    ("Help Center", "#help"),
    ("Contact Us", "#contact"),
    ("Documentation", "#documentation"),
    ("API Reference", "#api"),
];

const LEGAL: [(&str, &str); 4] = [
    ("Privacy Policy", "#privacy"),
    ("Terms of Service", "#terms"),
    ("Compliance", "#compliance"),
    ("Security", "#security"),
];

fn current_year() -> i32 {
    time::OffsetDateTime::now_utc().year()
}

#[component]
fn LinkColumn(title: &'static str, links: [(&'static str, &'static str); 4]) -> impl IntoView {
    view! {
        <div class="footer-section">
            <h4 class="footer-subtitle">{title}</h4>
            <ul class="footer-links">
                {links
                    .into_iter()
                    .map(|(label, href)| view! { <li><a href=href>{label}</a></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

/// Page footer shown on every route.
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <div class="footer-content">
                    <div class="footer-section">
                        <h3 class="footer-title">{BRAND_NAME}</h3>
                        <p class="footer-description">
                            "Secure, efficient, and compliant digital KYC platform for global banking solutions."
                        </p>
                        <p class="footer-tagline">{BRAND_TAGLINE}</p>
                    </div>
                    <LinkColumn title="Services" links=SERVICES/>
                    <LinkColumn title="Support" links=SUPPORT/>
                    <LinkColumn title="Legal" links=LEGAL/>
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">
                        {format!("© {} {BRAND_NAME}. All rights reserved.", current_year())}
                    </p>
                    <div class="footer-meta">
                        <span class="footer-version">{concat!("v", env!("CARGO_PKG_VERSION"))}</span>
                        <span class="footer-separator">"•"</span>
                        <span class="footer-status">
                            <span class="status-indicator"></span>
                            "All systems operational"
                        </span>
                    </div>
                </div>
            </div>
        </footer>
    }
}
