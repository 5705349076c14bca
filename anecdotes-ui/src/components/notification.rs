//! Notification Component
//!
//! Inline message shown while `visible` is true.

use leptos::*;

#[component]
pub fn Notification(
    #[prop(into)]
    message: String,
    #[prop(into)]
    visible: Signal<bool>,
) -> impl IntoView {
    view! {
        {move || {
            if visible.get() {
                view! { <p class="notification">{message.clone()}</p> }.into_view()
            } else {
                ().into_view()
            }
        }}
    }
}
