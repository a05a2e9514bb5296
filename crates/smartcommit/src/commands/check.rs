//! Check command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;

use smartcommit_core::CommitCompiler;
use smartcommit_tracker::JiraClient;

/// Arguments for the check command.
#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Commit message to check
    pub message: String,

    /// Print the extracted fields as JSON
    #[arg(long)]
    pub json: bool,

    /// Configuration file (defaults to the nearest smartcommit.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Runs the check command.
///
/// Extraction only: the subtask gate is never consulted and nothing is
/// written.
pub fn run(args: &CheckArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;
    let compiler = CommitCompiler::<JiraClient>::from_config(&config)?;

    let commit = compiler.extract(&args.message)?;

    if args.json {
        let json = serde_json::to_string_pretty(&commit).context("failed to serialize commit")?;
        println!("{json}");
    } else {
        println!("{commit}");
    }

    Ok(())
}
