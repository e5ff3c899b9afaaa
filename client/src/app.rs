//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::{footer::Footer, header::Header, protected_route::ProtectedRoute};
use crate::net::auth::MockAuthenticator;
use crate::pages::{
    dashboard::DashboardPage, documents::DocumentsPage, home::HomePage, kyc_profile::KycProfilePage,
    login::LoginPage, not_found::NotFoundPage, pep_declaration::PepDeclarationPage,
    ubo_declaration::UboDeclarationPage,
};
use crate::routes::AppRoute;
use crate::state::session::Session;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Owns the single session instance and the authentication service, and
/// wraps every protected page in the route guard.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(RwSignal::new(Session::new()));
    provide_context(MockAuthenticator::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/onboarding.css"/>
        <Title text="BTS Global Bank | Digital KYC"/>

        <Router>
            <div class="app">
                <Header/>
                <main class="main-content">
                    <Routes fallback=|| view! { <NotFoundPage/> }>
                        <Route path=StaticSegment(AppRoute::Home.segment()) view=HomePage/>
                        <Route path=StaticSegment(AppRoute::Login.segment()) view=LoginPage/>
                        <Route
                            path=StaticSegment(AppRoute::Dashboard.segment())
                            view=|| view! { <ProtectedRoute><DashboardPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment(AppRoute::KycProfile.segment())
                            view=|| view! { <ProtectedRoute><KycProfilePage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment(AppRoute::UboDeclaration.segment())
                            view=|| view! { <ProtectedRoute><UboDeclarationPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment(AppRoute::PepDeclaration.segment())
                            view=|| view! { <ProtectedRoute><PepDeclarationPage/></ProtectedRoute> }
                        />
                        <Route
                            path=StaticSegment(AppRoute::Documents.segment())
                            view=|| view! { <ProtectedRoute><DocumentsPage/></ProtectedRoute> }
                        />
                    </Routes>
                </main>
                <Footer/>
            </div>
        </Router>
    }
}
