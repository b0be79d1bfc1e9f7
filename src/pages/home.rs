//! Post-login landing page.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

/// Home page — placeholder for the application behind the login wall.
/// Redirects to `/login` once the session restore has finished and no
/// session is present.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let navigate = use_navigate();

    Effect::new(move || {
        let state = auth.get();
        if !state.loading && !state.is_authenticated() {
            navigate("/login", NavigateOptions::default());
        }
    });

    view! {
        <div class="home-page">
            <h1>"Welcome"</h1>
            <p>"You are signed in."</p>
        </div>
    }
}
