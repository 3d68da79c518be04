mod check;
mod completions;
mod generate;
mod list;

use std::path::{Path, PathBuf};

use check::CheckCommand;
use clap::{ArgAction, Parser, Subcommand};
use completions::CompletionsCommand;
use eyre::Result;
use generate::GenerateCommand;
use list::ListCommand;
use tagsmith_schema::{ConfigFile, DEFAULT_CONFIG_FILE};

/// Extension trait for exiting on schema errors with pretty formatting
pub(crate) trait UnwrapOrExit<T> {
    fn unwrap_or_exit(self) -> T;
}

impl<T> UnwrapOrExit<T> for tagsmith_schema::Result<T> {
    fn unwrap_or_exit(self) -> T {
        match self {
            Ok(v) => v,
            Err(e) => {
                eprintln!("{:?}", miette::Report::new(*e));
                std::process::exit(1);
            }
        }
    }
}

/// Open the config named on the command line, or `tagsmith.toml` if present.
///
/// An explicitly named config must exist; the default one may be absent.
pub(crate) fn open_config(path: Option<&Path>) -> ConfigFile {
    let config = match path {
        Some(path) => ConfigFile::open(path),
        None => ConfigFile::open_or_default(DEFAULT_CONFIG_FILE),
    };
    config.unwrap_or_exit()
}

#[derive(Parser)]
#[command(name = "tagsmith")]
#[command(version)]
#[command(about = "Generate fluent builder types from an element schema")]
pub(crate) struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn verbosity(&self) -> u8 {
        self.verbose
    }

    pub fn run(&self) -> Result<()> {
        match &self.command {
            Commands::Generate(cmd) => cmd.run(),
            Commands::Check(cmd) => cmd.run(),
            Commands::List(cmd) => cmd.run(),
            Commands::Completions(cmd) => cmd.run(),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate builder files from the element schema
    Generate(GenerateCommand),

    /// Validate the config and schema without generating code
    Check(CheckCommand),

    /// List schema entities and how each one is classified
    List(ListCommand),

    /// Generate shell completions
    Completions(CompletionsCommand),
}

/// Config path argument shared by every schema command.
#[derive(clap::Args)]
pub(crate) struct ConfigArg {
    /// Path to tagsmith.toml (defaults to ./tagsmith.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}
