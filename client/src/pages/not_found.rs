use leptos::prelude::*;

use crate::routes::AppRoute;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="container not-found">
            <h1 class="not-found__code">"404"</h1>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist."</p>
            <a href=AppRoute::Home.path() class="btn btn-primary">"Go Home"</a>
        </div>
    }
}
