//! Navigation Component
//!
//! Menu bar linking the three top-level views.

use anecdotes::routes::{MenuEntry, MENU};
use leptos::*;
use leptos_router::*;

/// Navigation menu
#[component]
pub fn Menu() -> impl IntoView {
    view! {
        <nav>
            {MENU.into_iter().map(|entry| view! { <MenuLink entry=entry /> }).collect_view()}
        </nav>
    }
}

/// Individual menu link
#[component]
fn MenuLink(entry: MenuEntry) -> impl IntoView {
    view! {
        <A href=entry.href exact={entry.href == "/"} class="menu-link" active_class="active">
            {entry.label}
        </A>
    }
}
