//! Anecdote Detail Page
//!
//! Reached through `/:id`. Unknown or malformed ids render a "not found"
//! state instead of a record.

use anecdotes::routes::Route;
use anecdotes::view::Detail;
use leptos::*;
use leptos_router::*;

use crate::state::use_global_state;

#[component]
pub fn AnecdoteDetail() -> impl IntoView {
    let state = use_global_state();
    let params = use_params_map();

    let detail = move || {
        let id = params.with(|p| p.get("id").cloned().unwrap_or_default());
        match Route::parse(&format!("/{}", id)) {
            Route::Anecdote(id) => Some(state.detail(id)),
            _ => None,
        }
    };

    view! {
        {move || match detail() {
            Some(Detail::Found(anecdote)) => view! {
                <h2>{format!("{} by {}", anecdote.content, anecdote.author)}</h2>
                <p>{format!("has {} votes", anecdote.votes)}</p>
                <p>"for more info see " <a href=anecdote.info.clone()>{anecdote.info.clone()}</a></p>
                <button on:click=move |_| state.vote(anecdote.id)>"vote"</button>
            }.into_view(),
            Some(missing @ Detail::NotFound(_)) => view! {
                <h2>{missing.title()}</h2>
                <A href="/">"Back to the anecdotes"</A>
            }.into_view(),
            None => view! {
                <h2>"Not a valid anecdote address"</h2>
                <A href="/">"Back to the anecdotes"</A>
            }.into_view(),
        }}
    }
}
