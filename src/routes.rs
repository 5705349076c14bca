//! Route table
//!
//! Maps URL paths to the four views and back:
//!
//! ```text
//! /          -> AnecdoteList
//! /create    -> CreateNew
//! /about     -> About
//! /:id       -> Anecdote(id)
//! anything else -> NotFound(path)
//! ```

use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::store::AnecdoteId;

/// A routable view
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    AnecdoteList,
    CreateNew,
    About,
    Anecdote(AnecdoteId),
    /// Path that matched no route, kept for display
    NotFound(String),
}

impl Route {
    /// Resolve a path; never fails, unknown paths become `NotFound`
    pub fn parse(path: &str) -> Self {
        let trimmed = path.trim();
        let inner = trimmed.trim_start_matches('/').trim_end_matches('/');

        match inner {
            "" => Route::AnecdoteList,
            "create" => Route::CreateNew,
            "about" => Route::About,
            segment if !segment.contains('/') => match segment.parse::<AnecdoteId>() {
                Ok(id) => Route::Anecdote(id),
                Err(_) => Route::NotFound(trimmed.to_string()),
            },
            _ => Route::NotFound(trimmed.to_string()),
        }
    }

    /// Path that leads to this route
    pub fn href(&self) -> String {
        match self {
            Route::AnecdoteList => "/".to_string(),
            Route::CreateNew => "/create".to_string(),
            Route::About => "/about".to_string(),
            Route::Anecdote(id) => format!("/{}", id),
            Route::NotFound(path) => path.clone(),
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Route::NotFound(_))
    }
}

impl FromStr for Route {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Route::parse(s))
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.href())
    }
}

/// One entry of the navigation menu
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: &'static str,
    pub href: &'static str,
}

/// Navigation menu, in display order
pub const MENU: [MenuEntry; 3] = [
    MenuEntry { label: "anecdotes", href: "/" },
    MenuEntry { label: "create new", href: "/create" },
    MenuEntry { label: "about", href: "/about" },
];
