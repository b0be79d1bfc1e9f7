//! Labeled password input with a visibility toggle and an inline
//! validation message.

use leptos::prelude::*;

/// A password field whose masking is controlled by `visible`. The eye
/// button flips it via `on_toggle`; the form state owns the flag.
#[component]
pub fn PasswordField(
    label: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    error: Signal<Option<&'static str>>,
    visible: Signal<bool>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
    on_toggle: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <div class="form-field__control">
                <input
                    class="form-field__input"
                    type=move || if visible.get() { "text" } else { "password" }
                    placeholder=placeholder
                    prop:value=move || value.get()
                    on:input=move |ev| on_input.run(event_target_value(&ev))
                    on:blur=move |_| on_blur.run(())
                />
                <button
                    type="button"
                    class="form-field__toggle"
                    aria-label="Toggle password visibility"
                    on:click=move |_| on_toggle.run(())
                >
                    <Show when=move || visible.get() fallback=EyeOffIcon>
                        <EyeIcon/>
                    </Show>
                </button>
            </div>
            <Show when=move || error.get().is_some()>
                <div class="form-field__error">{move || error.get()}</div>
            </Show>
        </div>
    }
}

#[component]
fn EyeIcon() -> impl IntoView {
    view! {
        <svg class="form-field__eye" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path d="M10 4c-5 0-8.5 4.5-9.5 6 1 1.5 4.5 6 9.5 6s8.5-4.5 9.5-6c-1-1.5-4.5-6-9.5-6z" fill="none" stroke="currentColor" stroke-width="1.5"></path>
            <circle cx="10" cy="10" r="3"></circle>
        </svg>
    }
}

#[component]
fn EyeOffIcon() -> impl IntoView {
    view! {
        <svg class="form-field__eye" viewBox="0 0 20 20" fill="currentColor" aria-hidden="true">
            <path d="M10 4c-5 0-8.5 4.5-9.5 6 1 1.5 4.5 6 9.5 6s8.5-4.5 9.5-6c-1-1.5-4.5-6-9.5-6z" fill="none" stroke="currentColor" stroke-width="1.5"></path>
            <line x1="3" y1="17" x2="17" y2="3" stroke="currentColor" stroke-width="1.5"></line>
        </svg>
    }
}
