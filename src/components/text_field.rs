//! Labeled text input with an inline validation message.

use leptos::prelude::*;

/// A labeled form field. The validation message renders under the
/// input whenever `error` carries one.
#[component]
pub fn TextField(
    label: &'static str,
    input_type: &'static str,
    placeholder: &'static str,
    value: Signal<String>,
    error: Signal<Option<&'static str>>,
    on_input: Callback<String>,
    on_blur: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="form-field">
            <label class="form-field__label">{label}</label>
            <input
                class="form-field__input"
                type=input_type
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
                on:blur=move |_| on_blur.run(())
            />
            <Show when=move || error.get().is_some()>
                <div class="form-field__error">{move || error.get()}</div>
            </Show>
        </div>
    }
}
