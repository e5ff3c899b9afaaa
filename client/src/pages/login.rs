//! Login page: credential form wired to the login flow.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_navigate, use_query_map};

use crate::components::header::BRAND_NAME;
use crate::net::auth::MockAuthenticator;
use crate::net::types::Credentials;
use crate::state::login::{LoginOutcome, run_login};
use crate::state::session::{Session, SessionAction, SessionCell};
use crate::util::auth::RETURN_TO_PARAM;

/// Submit button caption for the current loading state.
pub fn submit_label(loading: bool) -> &'static str {
    if loading { "Signing In..." } else { "Sign In" }
}

/// The message shown above the form: local validation first, then the session error.
pub fn visible_error(form_message: Option<&'static str>, session_error: Option<&str>) -> Option<String> {
    form_message.map(str::to_owned).or_else(|| session_error.map(str::to_owned))
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<Session>>();
    let authenticator = expect_context::<MockAuthenticator>();
    let query = use_query_map();
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let form_message = RwSignal::new(None::<&'static str>);

    let loading = move || session.with(Session::loading);
    let error = move || visible_error(form_message.get(), session.with(|s| s.error().map(str::to_owned)).as_deref());

    // Editing a field dismisses a stale failure message.
    let on_edit = move || {
        form_message.set(None);
        if session.with_untracked(|s| s.error().is_some()) {
            session.dispatch(SessionAction::ErrorCleared);
        }
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if session.with_untracked(Session::loading) {
            return;
        }
        let credentials = match Credentials::from_form(&email.get_untracked(), &password.get_untracked()) {
            Ok(credentials) => credentials,
            Err(message) => {
                form_message.set(Some(message));
                return;
            }
        };
        form_message.set(None);
        let return_to = query.with_untracked(|params| params.get(RETURN_TO_PARAM));
        let navigate = navigate.clone();

        leptos::task::spawn_local(async move {
            let outcome = run_login(&session, &authenticator, credentials, return_to.as_deref()).await;
            if let LoginOutcome::Authenticated { navigate_to } = outcome {
                navigate(&navigate_to, NavigateOptions { replace: true, ..NavigateOptions::default() });
            }
        });
    };

    view! {
        <div class="login-page">
            <div class="container">
                <div class="login-container">
                    <div class="login-card">
                        <div class="login-header">
                            <h1 class="login-title">"Welcome Back"</h1>
                            <p class="login-subtitle">{format!("Sign in to your {BRAND_NAME} account")}</p>
                        </div>

                        <form class="login-form" on:submit=on_submit>
                            <Show when=move || error().is_some()>
                                <div class="error-message" role="alert">
                                    {move || error().unwrap_or_default()}
                                </div>
                            </Show>

                            <div class="form-group">
                                <label for="email" class="form-label">"Email Address"</label>
                                <input
                                    id="email"
                                    name="email"
                                    type="email"
                                    class="form-control"
                                    placeholder="Enter your email"
                                    required
                                    prop:value=move || email.get()
                                    on:input=move |ev| {
                                        email.set(event_target_value(&ev));
                                        on_edit();
                                    }
                                />
                            </div>

                            <div class="form-group">
                                <label for="password" class="form-label">"Password"</label>
                                <input
                                    id="password"
                                    name="password"
                                    type="password"
                                    class="form-control"
                                    placeholder="Enter your password"
                                    required
                                    prop:value=move || password.get()
                                    on:input=move |ev| {
                                        password.set(event_target_value(&ev));
                                        on_edit();
                                    }
                                />
                            </div>

                            <button type="submit" class="btn btn-primary btn-lg" disabled=loading>
                                {move || submit_label(loading())}
                            </button>
                        </form>

                        <div class="login-footer">
                            <p>
                                "Don't have an account? "
                                <a href="mailto:onboarding@btsglobal.example" class="login-link">
                                    "Contact us to get started"
                                </a>
                            </p>
                        </div>
                    </div>
                </div>
            </div>
        </div>
    }
}
