//! App Root Component
//!
//! Main application component with routing and global providers.

use leptos::*;
use leptos_router::*;

use crate::components::Menu;
use crate::pages::{About, AnecdoteDetail, AnecdoteList, CreateNew};
use crate::state::global::provide_global_state;

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    // One store per page session, shared through context
    provide_global_state();

    view! {
        <Router>
            <div class="container">
                <h1>"Software anecdotes"</h1>
                <Menu />

                <main>
                    <Routes>
                        <Route path="/" view=AnecdoteList />
                        <Route path="/create" view=CreateNew />
                        <Route path="/about" view=About />
                        <Route path="/:id" view=AnecdoteDetail />
                        <Route path="/*any" view=NotFound />
                    </Routes>
                </main>

                <Footer />
            </div>
        </Router>
    }
}

/// Footer with attribution
#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer>
            "Anecdote app for "
            <a href="https://fullstackopen.com/">"Full Stack Open"</a>
            ". See "
            <a href="https://github.com/fullstack-hy2020/routed-anecdotes/blob/master/src/App.js">
                "https://github.com/fullstack-hy2020/routed-anecdotes/blob/master/src/App.js"
            </a>
            " for the source code."
        </footer>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div>
            <h2>"Page Not Found"</h2>
            <p>"The page you're looking for doesn't exist."</p>
            <A href="/">"Back to the anecdotes"</A>
        </div>
    }
}
