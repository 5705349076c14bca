//! Anecdotes Frontend
//!
//! Single-page anecdote app built with Leptos (WASM).
//!
//! # Features
//!
//! - Anecdote list with per-row voting
//! - Detail view per anecdote, with a "not found" state for unknown ids
//! - Create form built from field bindings
//! - Static about page
//!
//! # Architecture
//!
//! This is a client-side rendered (CSR) Leptos application that compiles to
//! WebAssembly. All state lives in memory for the page session; nothing is
//! sent to a server.

use leptos::*;

mod app;
mod components;
mod pages;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
