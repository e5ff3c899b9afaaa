//! Public landing page: hero, feature grid, onboarding steps, call to action.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;

use crate::components::header::BRAND_NAME;
use crate::routes::AppRoute;

pub(crate) struct Feature {
    pub icon: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

pub(crate) const FEATURES: [Feature; 6] = [
    Feature {
        icon: "🔒",
        title: "Secure & Compliant",
        description: "Bank-grade security with full regulatory compliance across multiple jurisdictions",
    },
    Feature {
        icon: "⚡",
        title: "Fast Processing",
        description: "Streamlined onboarding process that reduces verification time from days to minutes",
    },
    Feature {
        icon: "🌍",
        title: "Global Reach",
        description: "Support for international customers with multi-language and multi-currency capabilities",
    },
    Feature {
        icon: "📊",
        title: "Real-time Monitoring",
        description: "Advanced analytics and monitoring tools for risk assessment and compliance tracking",
    },
    Feature {
        icon: "🤖",
        title: "AI-Powered",
        description: "Machine learning algorithms for enhanced fraud detection and risk scoring",
    },
    Feature {
        icon: "📱",
        title: "Mobile Ready",
        description: "Responsive design that works seamlessly across all devices and platforms",
    },
];

/// Onboarding steps as (title, description); numbered in display order.
pub(crate) const PROCESS_STEPS: [(&str, &str); 4] = [
    ("Create Profile", "Provide basic information and create your secure account"),
    ("Upload Documents", "Submit required identification and verification documents"),
    ("Complete Declarations", "Fill out UBO and PEP declarations for compliance"),
    ("Get Approved", "Receive approval and start using our banking services"),
];

/// Steps paired with their 1-based display number.
pub(crate) fn numbered_steps() -> impl Iterator<Item = (usize, &'static str, &'static str)> {
    PROCESS_STEPS.iter().zip(1..).map(|(&(title, description), number)| (number, title, description))
}

#[component]
pub fn HomePage() -> impl IntoView {
    let login = AppRoute::Login.path();

    let features = FEATURES
        .iter()
        .map(|feature| {
            view! {
                <div class="feature-card">
                    <div class="feature-icon">{feature.icon}</div>
                    <h3 class="feature-title">{feature.title}</h3>
                    <p class="feature-description">{feature.description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let steps = numbered_steps()
        .map(|(number, title, description)| {
            view! {
                <div class="process-step">
                    <div class="step-number">{number}</div>
                    <h3 class="step-title">{title}</h3>
                    <p class="step-description">{description}</p>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="home-page">
            <section class="hero-section">
                <div class="container hero-content">
                    <h1 class="hero-title">"Digital KYC Platform"</h1>
                    <p class="hero-subtitle">
                        "Secure, efficient, and compliant customer onboarding solution for global banking"
                    </p>
                    <div class="hero-cta">
                        <a href=login class="btn btn-primary btn-lg">"Start Onboarding"</a>
                        <a href="#features" class="btn btn-outline btn-lg">"Learn More"</a>
                    </div>
                </div>
            </section>

            <section id="features" class="features-section">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">{format!("Why Choose {BRAND_NAME}?")}</h2>
                        <p class="section-subtitle">
                            "Our digital KYC platform provides comprehensive compliance solutions with cutting-edge technology"
                        </p>
                    </div>
                    <div class="features-grid">{features}</div>
                </div>
            </section>

            <section class="process-section">
                <div class="container">
                    <div class="section-header">
                        <h2 class="section-title">"Simple Onboarding Process"</h2>
                        <p class="section-subtitle">
                            "Get started with our streamlined KYC process in just a few steps"
                        </p>
                    </div>
                    <div class="process-steps">{steps}</div>
                </div>
            </section>

            <section class="cta-section">
                <div class="container cta-content">
                    <h2 class="cta-title">"Ready to Get Started?"</h2>
                    <p class="cta-description">
                        {format!("Join thousands of customers who trust {BRAND_NAME} for their financial needs")}
                    </p>
                    <a href=login class="btn btn-primary btn-lg">"Start Your Application"</a>
                </div>
            </section>
        </div>
    }
}
