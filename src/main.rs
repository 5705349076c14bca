//! Anecdotes CLI
//!
//! Terminal front end for the anecdote app:
//! - `shell` (default): interactive session with routing, voting and the create form
//! - `list`: print the seeded collection
//! - `config`: generate a default config file

use std::path::PathBuf;

use anecdotes::config::{generate_default_config, Config};
use anecdotes::shell::{self, Command, Outcome};
use anecdotes::{logging, AnecdoteStore, Session};
use clap::{Parser, Subcommand, ValueEnum};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::watch;

#[derive(Parser)]
#[command(name = "anecdotes")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Collect and vote on software anecdotes")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format for `list`
    #[arg(short, long, value_enum, default_value_t = Format::Table, global = true)]
    pub format: Format,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session
    Shell,

    /// Print the anecdotes a new session starts with
    List,

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_with_env(path)?,
        None => Config::load_default(),
    };
    logging::init(&config.logging)?;

    match cli.command.unwrap_or(Commands::Shell) {
        Commands::Shell => {
            let session = Session::from_config(&config)?;
            run_shell(session).await?;
        }

        Commands::List => {
            let store = AnecdoteStore::from_config(&config.store)?;
            match cli.format {
                Format::Json => {
                    println!("{}", serde_json::to_string_pretty(&*store.list())?);
                }
                Format::Table => {
                    for anecdote in store.list().iter() {
                        println!("{}", shell::render_row(anecdote));
                        println!("        {} <{}>", anecdote.author, anecdote.info);
                    }
                }
            }
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)?;
                    println!("Wrote default config to {}", path.display());
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

async fn run_shell(mut session: Session) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    println!("{}\n", shell::render(&session));
    println!("Type `help` for commands.");

    loop {
        let notification = session.notification_watch();

        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    break;
                };

                match line.parse::<Command>().and_then(|cmd| shell::execute(&mut session, cmd)) {
                    Ok(Outcome::Quit) => break,
                    Ok(Outcome::Show(message)) => {
                        if let Some(message) = message {
                            println!("{}\n", message);
                        }
                        println!("{}\n", shell::render(&session));
                    }
                    Err(e) => eprintln!("{}", e),
                }
            }
            _ = hidden(notification), if session.notification().is_some() => {
                println!("{}\n", shell::render(&session));
            }
        }
    }

    tracing::info!("Session ended");
    Ok(())
}

/// Resolves once the notification hides (or goes away)
async fn hidden(visible: Option<watch::Receiver<bool>>) {
    if let Some(mut visible) = visible {
        let _ = visible.wait_for(|shown| !*shown).await;
    }
}
