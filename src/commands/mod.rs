//! Command dispatch.
//!
//! One CLI argument selects one of the four commands; everything else the
//! command needs is collected interactively. Parsing goes through
//! `try_parse` so the dispatcher keeps control of exit codes: bad input of
//! any kind prints a message and still exits 0, matching the established
//! console behavior.

pub mod add;
pub mod delete;
pub mod list;
pub mod update;

use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::prompt::Prompter;
use crate::msg_error;
use anyhow::Result;
use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add,
    #[command(about = "Update an existing task")]
    Update,
    #[command(about = "Delete a task")]
    Delete,
    #[command(about = "List all tasks")]
    List,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu(tasks: &mut Tasks) -> Result<()> {
        let cli = match Self::try_parse() {
            Ok(cli) => cli,
            Err(err) => return Self::handle_parse_error(err),
        };

        let mut prompter = Prompter::stdin();
        match cli.command {
            Commands::Add => add::cmd(tasks, &mut prompter),
            Commands::Update => update::cmd(tasks, &mut prompter),
            Commands::Delete => delete::cmd(tasks, &mut prompter),
            Commands::List => list::cmd(tasks),
        }
    }

    /// Renders parse failures without letting clap terminate the process.
    /// An unrecognized command gets the catalog message, a bare invocation
    /// gets the generated help on stdout, and everything else (including
    /// `--help` and `--version`) gets clap's own rendering.
    fn handle_parse_error(err: clap::Error) -> Result<()> {
        match err.kind() {
            ErrorKind::InvalidSubcommand => {
                msg_error!(Message::InvalidCommand);
            }
            ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand => {
                Self::command().print_help()?;
            }
            _ => {
                err.print()?;
            }
        }

        Ok(())
    }
}
