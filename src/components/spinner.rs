//! Inline busy indicator shown on the submit button while a login
//! request is in flight.

use leptos::prelude::*;

#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <svg class="spinner" viewBox="0 0 24 24" fill="none" aria-hidden="true">
            <circle class="spinner__track" cx="12" cy="12" r="10" stroke="currentColor" stroke-width="4"></circle>
            <path
                class="spinner__arc"
                fill="currentColor"
                d="M4 12a8 8 0 018-8V0C5.373 0 0 5.373 0 12h4zm2 5.291A7.962 7.962 0 014 12H0c0 3.042 1.135 5.824 3 7.938l3-2.647z"
            ></path>
        </svg>
    }
}
