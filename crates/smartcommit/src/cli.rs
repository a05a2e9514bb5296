//! CLI definition.

use anyhow::Result;
use clap::{Parser, Subcommand};

use crate::commands;

/// Compile free-form commit messages into Jira smart commits.
#[derive(Debug, Parser)]
#[command(name = "smartcommit")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Rewrite a commit message file (run from the commit-msg hook)
    Hook(commands::hook::HookArgs),

    /// Check a message offline without contacting the tracker
    Check(commands::check::CheckArgs),

    /// Create a smartcommit.toml and optionally install the git hook
    Init(commands::init::InitArgs),
}

impl Cli {
    /// Runs the CLI command.
    pub fn run(self) -> Result<()> {
        match self.command {
            Commands::Hook(args) => commands::hook::run(args),
            Commands::Check(args) => commands::check::run(&args),
            Commands::Init(args) => commands::init::run(&args),
        }
    }
}
