//! Create New Page
//!
//! Form for adding an anecdote. Each input is a field binding; the reset
//! button clears all three.

use anecdotes::routes::Route;
use anecdotes::store::NewAnecdote;
use anecdotes::view::Flash;
use leptos::*;
use leptos_router::*;

use crate::components::FieldInput;
use crate::state::{use_field, use_global_state};

#[component]
pub fn CreateNew() -> impl IntoView {
    let state = use_global_state();
    let navigate = use_navigate();

    let content = use_field("text");
    let author = use_field("text");
    let info = use_field("text");

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();

        let draft = NewAnecdote::new(content.value(), author.value(), info.value());
        if let Some(added) = state.add(draft) {
            state.set_flash(Flash::Created { id: added.id });
        }

        navigate(&Route::AnecdoteList.href(), Default::default());
    };

    let on_reset = move |_: ev::MouseEvent| {
        content.reset();
        author.reset();
        info.reset();
    };

    view! {
        <div>
            <h2>"create a new anecdote"</h2>
            <form on:submit=on_submit>
                <div>
                    "content"
                    <FieldInput binding=content />
                </div>
                <div>
                    "author"
                    <FieldInput binding=author />
                </div>
                <div>
                    "url for more info"
                    <FieldInput binding=info />
                </div>
                <button type="submit">"create"</button>
            </form>
            <button type="button" on:click=on_reset>"reset"</button>
        </div>
    }
}
