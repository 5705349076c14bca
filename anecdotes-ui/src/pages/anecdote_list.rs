//! Anecdote List Page
//!
//! All anecdotes with a vote button per row. Shows the "added" notification
//! when arriving from the create form; its hide timer is cancelled if the
//! page unmounts first.

use anecdotes::routes::Route;
use anecdotes::store::Anecdote;
use anecdotes::view::NOTIFICATION_MS;
use gloo_timers::callback::Timeout;
use leptos::*;
use leptos_router::*;

use crate::components::Notification;
use crate::state::use_global_state;

#[component]
pub fn AnecdoteList() -> impl IntoView {
    let state = use_global_state();

    let show_notification = create_rw_signal(false);
    let message = state.take_flash().map(|flash| flash.message());

    if message.is_some() {
        show_notification.set(true);
        let timeout = Timeout::new(NOTIFICATION_MS as u32, move || {
            show_notification.set(false);
        });
        // dropping a pending Timeout cancels it
        on_cleanup(move || drop(timeout));
    }

    view! {
        <div>
            <h2>"Anecdotes"</h2>
            {message.map(|message| view! {
                <Notification message=message visible=show_notification />
            })}
            <ul>
                {move || {
                    state.anecdotes()
                        .iter()
                        .cloned()
                        .map(|anecdote| view! { <AnecdoteRow anecdote=anecdote /> })
                        .collect_view()
                }}
            </ul>
        </div>
    }
}

#[component]
fn AnecdoteRow(anecdote: Anecdote) -> impl IntoView {
    let state = use_global_state();
    let id = anecdote.id;

    view! {
        <li>
            <A href=Route::Anecdote(id).href()>{anecdote.content}</A>
            " "
            <span class="votes">{format!("({} votes)", anecdote.votes)}</span>
            " "
            <button on:click=move |_| state.vote(id)>"vote"</button>
        </li>
    }
}
