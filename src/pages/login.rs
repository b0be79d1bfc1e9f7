//! Login page: email/password form with inline validation, a single
//! in-flight submission, and a Google sign-in redirect.
//!
//! SUBMIT FLOW
//! ===========
//! `try_begin_submit` guards reentry and moves the state machine to
//! `Submitting`; the one awaited call is the login request. On success
//! the session goes to the credential store and we navigate home. On
//! failure the form re-enables with a message that persists until the
//! next attempt.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::components::password_field::PasswordField;
use crate::components::spinner::Spinner;
use crate::components::text_field::TextField;
use crate::net;
use crate::state::auth::AuthState;
use crate::state::login::LoginFormState;
use crate::state::ui::UiState;

/// Login page component.
#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let ui = expect_context::<RwSignal<UiState>>();
    let form = RwSignal::new(LoginFormState::default());
    let navigate = use_navigate();

    let email = Signal::derive(move || form.with(|f| f.email.clone()));
    let password = Signal::derive(move || form.with(|f| f.password.clone()));
    let email_error = Signal::derive(move || form.with(LoginFormState::email_error));
    let password_error = Signal::derive(move || form.with(LoginFormState::password_error));
    let show_password = Signal::derive(move || form.with(|f| f.show_password));

    let on_email_input = Callback::new(move |v: String| form.update(|f| f.set_email(v)));
    let on_email_blur = Callback::new(move |()| form.update(LoginFormState::visit_email));
    let on_password_input = Callback::new(move |v: String| form.update(|f| f.set_password(v)));
    let on_password_blur = Callback::new(move |()| form.update(LoginFormState::visit_password));
    let on_toggle_password =
        Callback::new(move |()| form.update(LoginFormState::toggle_password_visibility));

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let mut started = false;
        form.update(|f| started = f.try_begin_submit());
        if !started {
            return;
        }

        let credentials = form.with_untracked(LoginFormState::credentials);
        let navigate = navigate.clone();
        leptos::task::spawn_local(async move {
            let result = net::api::login(&credentials).await;
            let mut session = None;
            form.update(|f| session = f.finish_submit(result));
            if let Some(session) = session {
                auth.update(|a| a.set_credentials(session));
                navigate("/", NavigateOptions::default());
            }
        });
    };

    let on_google = move |_| net::api::sign_in_with_provider("google");

    view! {
        <div class="login-page">
            <div class="login-page__illustration">
                <img
                    src=move || ui.with(|u| u.theme.illustration_asset())
                    alt="Sign in illustration"
                />
            </div>
            <div class="login-page__panel">
                <form class="login-form" on:submit=on_submit>
                    <img
                        class="login-form__logo"
                        width="170"
                        src=move || ui.with(|u| u.theme.logo_asset())
                        alt="Lumen logo"
                    />
                    <h1 class="login-form__title">"Log In"</h1>
                    <TextField
                        label="Email"
                        input_type="email"
                        placeholder="enter your email"
                        value=email
                        error=email_error
                        on_input=on_email_input
                        on_blur=on_email_blur
                    />
                    <PasswordField
                        label="Password"
                        placeholder="enter your password"
                        value=password
                        error=password_error
                        visible=show_password
                        on_input=on_password_input
                        on_blur=on_password_blur
                        on_toggle=on_toggle_password
                    />
                    <Show when=move || form.with(|f| f.submit_error().is_some())>
                        <div class="login-form__error">
                            {move || form.with(LoginFormState::submit_error)}
                        </div>
                    </Show>
                    <button
                        class="btn btn--primary login-form__submit"
                        type="submit"
                        disabled=move || form.with(LoginFormState::is_submitting)
                    >
                        <Show
                            when=move || form.with(LoginFormState::is_submitting)
                            fallback=|| "Log in"
                        >
                            <Spinner/>
                        </Show>
                    </button>
                </form>
                <div class="login-page__alt">
                    <button class="btn login-page__google" on:click=on_google>
                        "Log in with Google"
                    </button>
                    <small class="login-page__forgot">
                        "Forgot password? "
                        <a href="/forgot-password">"Click here"</a>
                    </small>
                </div>
            </div>
        </div>
    }
}
