//! Terminal shell
//!
//! Line-oriented presentation layer over a [`Session`]: parses one command
//! per line, applies it, and renders the current view as plain text.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::field::DRAFT_FIELDS;
use crate::routes::{Route, MENU};
use crate::session::Session;
use crate::store::{Anecdote, AnecdoteId};
use crate::view::Detail;

pub const TITLE: &str = "Software anecdotes";

pub const ABOUT: &str = "\
According to Wikipedia:

  An anecdote is a brief, revealing account of an individual person or an incident.
  Occasionally humorous, anecdotes differ from jokes because their primary purpose is
  not simply to provoke laughter but to reveal a truth more general than the brief tale
  itself, such as to characterize a person by delineating a specific quirk or trait, to
  communicate an abstract idea about a person, place, or thing through the concrete
  details of a short narrative. An anecdote is \"a story with a point.\"

Software engineering is full of excellent anecdotes, at this app you can find the best and add more.";

pub const FOOTER: &str = "Anecdote app for Full Stack Open (https://fullstackopen.com/).";

pub const HELP: &str = "\
Commands:
  list                 show all anecdotes
  show <id>            show one anecdote
  create               open the create form
  about                about this app
  go <path>            open a path (/, /create, /about, /<id>)
  vote <id>            vote for an anecdote
  set <field> <text>   fill a form field (content, author, info)
  submit               create the anecdote from the form
  reset                clear the form
  menu                 show the navigation menu
  help                 show this help
  quit                 leave";

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ShellError {
    #[error("Unknown command: {0} (try `help`)")]
    UnknownCommand(String),

    #[error("Missing argument: {0}")]
    MissingArgument(&'static str),

    #[error("Invalid anecdote id: {0}")]
    InvalidId(String),

    #[error("Unknown field: {0} (expected content, author or info)")]
    UnknownField(String),

    #[error("The form is only available on the create view")]
    NoForm,
}

/// One parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Re-render the current view
    Render,
    Go(Route),
    Vote(AnecdoteId),
    Set { field: String, value: String },
    Submit,
    Reset,
    Menu,
    Help,
    Quit,
}

fn parse_id(arg: Option<&str>) -> Result<AnecdoteId, ShellError> {
    let arg = arg.ok_or(ShellError::MissingArgument("id"))?;
    arg.parse()
        .map_err(|_| ShellError::InvalidId(arg.to_string()))
}

impl FromStr for Command {
    type Err = ShellError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };
        let arg = (!rest.is_empty()).then_some(rest);

        match word.to_lowercase().as_str() {
            "" => Ok(Command::Render),
            "list" | "anecdotes" => Ok(Command::Go(Route::AnecdoteList)),
            "create" | "new" => Ok(Command::Go(Route::CreateNew)),
            "about" => Ok(Command::Go(Route::About)),
            "show" | "open" => parse_id(arg).map(|id| Command::Go(Route::Anecdote(id))),
            "go" => arg
                .map(|path| Command::Go(Route::parse(path)))
                .ok_or(ShellError::MissingArgument("path")),
            "vote" => parse_id(arg).map(Command::Vote),
            "set" => {
                let arg = arg.ok_or(ShellError::MissingArgument("field"))?;
                let (field, value) = match arg.split_once(char::is_whitespace) {
                    Some((field, value)) => (field.to_lowercase(), value.trim()),
                    None => (arg.to_lowercase(), ""),
                };
                if !DRAFT_FIELDS.contains(&field.as_str()) {
                    return Err(ShellError::UnknownField(field));
                }
                Ok(Command::Set {
                    field,
                    value: value.to_string(),
                })
            }
            "submit" => Ok(Command::Submit),
            "reset" => Ok(Command::Reset),
            "menu" => Ok(Command::Menu),
            "help" | "?" => Ok(Command::Help),
            "quit" | "exit" | "q" => Ok(Command::Quit),
            other => Err(ShellError::UnknownCommand(other.to_string())),
        }
    }
}

/// What the read loop should do after a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Print this text, then the current view
    Show(Option<String>),
    Quit,
}

/// Apply a command to the session
pub fn execute(session: &mut Session, command: Command) -> Result<Outcome, ShellError> {
    match command {
        Command::Render => Ok(Outcome::Show(None)),
        Command::Go(route) => {
            session.navigate(route);
            Ok(Outcome::Show(None))
        }
        Command::Vote(id) => Ok(Outcome::Show(Some(match session.vote(id) {
            Some(a) => format!("Voted for #{} ({} votes)", a.id, a.votes),
            None => format!("No anecdote with id {}", id),
        }))),
        Command::Set { field, value } => {
            let form = session.form_mut().ok_or(ShellError::NoForm)?;
            form.field_mut(&field)
                .ok_or_else(|| ShellError::UnknownField(field.clone()))?
                .on_change(value);
            Ok(Outcome::Show(None))
        }
        Command::Submit => {
            let added = session.submit().ok_or(ShellError::NoForm)?;
            tracing::info!(id = added.id, "Anecdote created from shell");
            Ok(Outcome::Show(None))
        }
        Command::Reset => {
            session.form_mut().ok_or(ShellError::NoForm)?.reset();
            Ok(Outcome::Show(None))
        }
        Command::Menu => Ok(Outcome::Show(Some(render_menu()))),
        Command::Help => Ok(Outcome::Show(Some(HELP.to_string()))),
        Command::Quit => Ok(Outcome::Quit),
    }
}

pub fn render_menu() -> String {
    MENU.iter()
        .map(|entry| format!("{} ({})", entry.label, entry.href))
        .collect::<Vec<_>>()
        .join("  |  ")
}

/// One row of the list view
pub fn render_row(anecdote: &Anecdote) -> String {
    format!(
        "  [{}] {} ({} vote{})",
        anecdote.id,
        anecdote.content,
        anecdote.votes,
        if anecdote.votes == 1 { "" } else { "s" }
    )
}

/// Render the whole screen for the current view
pub fn render(session: &Session) -> String {
    Screen(session).to_string()
}

/// Full-screen text of the current view
pub struct Screen<'a>(pub &'a Session);

impl fmt::Display for Screen<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let session = self.0;
        writeln!(f, "{}", TITLE)?;
        writeln!(f, "{}", render_menu())?;
        writeln!(f)?;

        match session.route() {
            Route::AnecdoteList => {
                writeln!(f, "Anecdotes")?;
                if let Some(message) = session.notification() {
                    writeln!(f, "  >> {}", message)?;
                }
                for anecdote in session.store().list().iter() {
                    writeln!(f, "{}", render_row(anecdote))?;
                }
            }
            Route::CreateNew => {
                writeln!(f, "create a new anecdote")?;
                if let Some(form) = session.form() {
                    for (label, name) in [
                        ("content", "content"),
                        ("author", "author"),
                        ("url for more info", "info"),
                    ] {
                        let value = form.field(name).map(|field| field.value()).unwrap_or_default();
                        writeln!(f, "  {:<18} {}", label, value)?;
                    }
                }
                writeln!(f, "  (set <field> <text>, submit, reset)")?;
            }
            Route::About => {
                writeln!(f, "About anecdote app")?;
                writeln!(f, "{}", ABOUT)?;
            }
            Route::Anecdote(_) => match session.detail() {
                Some(Detail::Found(a)) => {
                    writeln!(f, "{} by {}", a.content, a.author)?;
                    writeln!(f, "has {} votes", a.votes)?;
                    writeln!(f, "for more info see {}", a.info)?;
                }
                Some(detail @ Detail::NotFound(_)) => writeln!(f, "{}", detail.title())?,
                None => {}
            },
            Route::NotFound(path) => writeln!(f, "Page not found: {}", path)?,
        }

        writeln!(f)?;
        write!(f, "{}", FOOTER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NotificationConfig;
    use crate::store::AnecdoteStore;

    fn session() -> Session {
        Session::new(AnecdoteStore::seeded(), &NotificationConfig::default())
    }

    fn run(session: &mut Session, line: &str) -> Result<Outcome, ShellError> {
        execute(session, line.parse()?)
    }

    #[test]
    fn test_parse_navigation() {
        assert_eq!("list".parse::<Command>(), Ok(Command::Go(Route::AnecdoteList)));
        assert_eq!(" CREATE ".parse::<Command>(), Ok(Command::Go(Route::CreateNew)));
        assert_eq!("show 2".parse::<Command>(), Ok(Command::Go(Route::Anecdote(2))));
        assert_eq!("go /about".parse::<Command>(), Ok(Command::Go(Route::About)));
        assert_eq!("".parse::<Command>(), Ok(Command::Render));
    }

    #[test]
    fn test_parse_set_keeps_spaces() {
        assert_eq!(
            "set content If it hurts, do it more often".parse::<Command>(),
            Ok(Command::Set {
                field: "content".to_string(),
                value: "If it hurts, do it more often".to_string(),
            })
        );
        assert_eq!(
            "set info".parse::<Command>(),
            Ok(Command::Set {
                field: "info".to_string(),
                value: String::new(),
            })
        );
    }

    #[test]
    fn test_parse_set_ignores_field_case() {
        assert_eq!(
            "SET Content Talk is cheap".parse::<Command>(),
            Ok(Command::Set {
                field: "content".to_string(),
                value: "Talk is cheap".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            "dance".parse::<Command>(),
            Err(ShellError::UnknownCommand("dance".to_string()))
        );
        assert_eq!("vote".parse::<Command>(), Err(ShellError::MissingArgument("id")));
        assert_eq!(
            "vote x".parse::<Command>(),
            Err(ShellError::InvalidId("x".to_string()))
        );
        assert_eq!(
            "set votes 10".parse::<Command>(),
            Err(ShellError::UnknownField("votes".to_string()))
        );
        assert_eq!("go".parse::<Command>(), Err(ShellError::MissingArgument("path")));
    }

    #[tokio::test(start_paused = true)]
    async fn test_create_flow() {
        let mut session = session();

        assert_eq!(run(&mut session, "set content X"), Err(ShellError::NoForm));

        run(&mut session, "create").unwrap();
        run(&mut session, "set content Talk is cheap. Show me the code.").unwrap();
        run(&mut session, "set author Linus Torvalds").unwrap();
        run(&mut session, "set info https://lkml.org").unwrap();
        assert!(render(&session).contains("Linus Torvalds"));

        run(&mut session, "submit").unwrap();

        let screen = render(&session);
        assert!(screen.contains(">> Anecdote got added!"));
        assert!(screen.contains("[3] Talk is cheap. Show me the code. (0 votes)"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_clears_form() {
        let mut session = session();
        run(&mut session, "create").unwrap();
        run(&mut session, "set author Someone").unwrap();
        run(&mut session, "reset").unwrap();

        assert!(session.form().unwrap().is_blank());
        assert!(!render(&session).contains("Someone"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_vote_outcomes() {
        let mut session = session();

        assert_eq!(
            run(&mut session, "vote 1"),
            Ok(Outcome::Show(Some("Voted for #1 (1 votes)".to_string())))
        );
        assert_eq!(
            run(&mut session, "vote 9"),
            Ok(Outcome::Show(Some("No anecdote with id 9".to_string())))
        );
        assert!(render(&session).contains("[1] If it hurts, do it more often (1 vote)"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_render_detail_views() {
        let mut session = session();

        run(&mut session, "show 2").unwrap();
        let screen = render(&session);
        assert!(screen.contains("Premature optimization is the root of all evil by Donald Knuth"));
        assert!(screen.contains("has 0 votes"));

        run(&mut session, "show 50").unwrap();
        assert!(render(&session).contains("No anecdote with id 50"));

        run(&mut session, "go /nope").unwrap();
        assert!(render(&session).contains("Page not found: /nope"));
    }

    #[test]
    fn test_quit_and_help() {
        let mut session = session();
        assert_eq!(run(&mut session, "quit"), Ok(Outcome::Quit));
        assert_eq!(
            run(&mut session, "help"),
            Ok(Outcome::Show(Some(HELP.to_string())))
        );
    }

    #[test]
    fn test_menu_lists_routes() {
        let menu = render_menu();
        assert!(menu.contains("anecdotes (/)"));
        assert!(menu.contains("create new (/create)"));
        assert!(menu.contains("about (/about)"));
    }
}
