//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::pages::{home::HomePage, login::LoginPage};
use crate::state::{auth::AuthState, ui::UiState};
use crate::{net, util};

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
/// Provides the shared state contexts, initializes the theme, restores
/// any existing session, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let ui = RwSignal::new(UiState::default());

    provide_context(auth);
    provide_context(ui);

    // Theme preference is read once at startup; the class on <html>
    // and the context value stay in sync.
    Effect::new(move || {
        let theme = util::theme::read_preference();
        util::theme::apply(theme);
        ui.update(|u| u.theme = theme);
    });

    // Restore an existing session before the home page decides to
    // bounce the user to /login.
    Effect::new(move || {
        auth.update(|a| a.loading = true);
        leptos::task::spawn_local(async move {
            let session = net::api::fetch_session().await;
            auth.update(|a| {
                a.session = session;
                a.loading = false;
            });
        });
    });

    view! {
        <Stylesheet id="leptos" href="/pkg/lumen-client.css"/>
        <Title text="Lumen"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("") view=HomePage/>
            </Routes>
        </Router>
    }
}
