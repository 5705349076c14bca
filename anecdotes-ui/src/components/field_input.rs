//! Field Input Component
//!
//! Renders an `<input>` from a field binding's attribute set.

use leptos::*;

use crate::state::field::{FieldAttrs, FieldBinding};

#[component]
pub fn FieldInput(binding: FieldBinding) -> impl IntoView {
    let FieldAttrs {
        kind,
        value,
        on_input,
    } = binding.attrs();

    view! {
        <input
            type=kind
            prop:value=move || value.get()
            on:input=move |ev| on_input.call(ev)
        />
    }
}
