//! Root dispatcher and subcommand registry
//!
//! The clap command tree built from [`Cli`] is the registry: it is assembled
//! once at startup, never mutated, and maps the first positional token onto a
//! [`Commands`] variant whose handler lives in [`crate::commands::porcelain`].

use crate::commands::porcelain;
use crate::errors::CommandError;
use clap::{ArgAction, Args, CommandFactory, Parser, Subcommand};
use tracing::debug;

#[derive(Parser, Debug)]
#[command(
    name = "twig",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "A version control tool in the making",
    long_about = "A version control tool in the making. \
    The commands below are registered, but none of them does any work yet: \
    each one fails with 'not implemented'.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

COMMANDS:
{subcommands}

OPTIONS:
{options}
",
)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
    #[arg(
        short,
        long,
        action = ArgAction::Count,
        help = "Increase log verbosity (-v info, -vv debug, -vvv trace)"
    )]
    verbose: u8,
}

/// Arguments a stub accepts and ignores, hyphenated ones included.
#[derive(Args, Debug, Default, Clone, PartialEq, Eq)]
pub struct PassthroughArgs {
    #[arg(trailing_var_arg = true, allow_hyphen_values = true, hide = true)]
    pub args: Vec<String>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    #[command(
        name = "init",
        about = "You have to start somewhere, let it be here",
        long_about = "Initialize a new repository. Not implemented yet."
    )]
    Init(PassthroughArgs),
    #[command(
        name = "add",
        about = "Add first, ask questions later",
        long_about = "Stage files for the next commit. Not implemented yet."
    )]
    Add(PassthroughArgs),
    #[command(
        name = "commit",
        about = "Because you can't always sit on that fence",
        long_about = "Record the staged changes as a new commit. Not implemented yet."
    )]
    Commit(PassthroughArgs),
    #[command(
        name = "log",
        about = "Logs seem like a good idea",
        long_about = "Show the commit history. Not implemented yet."
    )]
    Log(PassthroughArgs),
    #[command(
        name = "checkout",
        about = "Check it out, man!",
        long_about = "Switch branches or restore files. Not implemented yet."
    )]
    Checkout(PassthroughArgs),
}

impl Cli {
    pub fn verbose(&self) -> u8 {
        self.verbose
    }

    #[cfg(test)]
    pub fn subcommand(&self) -> Option<&Commands> {
        self.command.as_ref()
    }

    /// Run the resolved subcommand, or print usage to stdout when none was given.
    pub async fn execute(self) -> anyhow::Result<()> {
        let Some(command) = self.command else {
            debug!("no subcommand given, printing usage");
            Cli::command().print_help()?;
            return Ok(());
        };

        debug!(
            command = command.name(),
            ignored = command.args().len(),
            "dispatching"
        );
        if let Err(error) = command.run().await {
            debug!(command = error.command(), kind = ?error.kind(), "command failed");
            return Err(error.into());
        }

        Ok(())
    }
}

impl Commands {
    pub fn name(&self) -> &'static str {
        match self {
            Commands::Init(_) => "init",
            Commands::Add(_) => "add",
            Commands::Commit(_) => "commit",
            Commands::Log(_) => "log",
            Commands::Checkout(_) => "checkout",
        }
    }

    /// Short description shown next to the name in the usage listing.
    #[cfg(test)]
    pub fn about(&self) -> String {
        Cli::command()
            .find_subcommand(self.name())
            .and_then(|subcommand| subcommand.get_about())
            .map(ToString::to_string)
            .unwrap_or_default()
    }

    pub fn args(&self) -> &[String] {
        match self {
            Commands::Init(passthrough)
            | Commands::Add(passthrough)
            | Commands::Commit(passthrough)
            | Commands::Log(passthrough)
            | Commands::Checkout(passthrough) => &passthrough.args,
        }
    }

    pub async fn run(&self) -> Result<(), CommandError> {
        match self {
            Commands::Init(passthrough) => porcelain::init(&passthrough.args).await,
            Commands::Add(passthrough) => porcelain::add(&passthrough.args).await,
            Commands::Commit(passthrough) => porcelain::commit(&passthrough.args).await,
            Commands::Log(passthrough) => porcelain::log(&passthrough.args).await,
            Commands::Checkout(passthrough) => porcelain::checkout(&passthrough.args).await,
        }
    }
}
