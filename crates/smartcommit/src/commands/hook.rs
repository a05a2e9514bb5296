//! Commit-msg hook command.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use tracing::{debug, info};

use smartcommit_config::Config;
use smartcommit_core::{BranchPolicy, CommitCompiler, CommitMessageStore, SubtaskGate};
use smartcommit_git::current_branch;
use smartcommit_tracker::{Credentials, JiraClient};

/// Arguments for the hook command.
#[derive(Debug, Args)]
pub struct HookArgs {
    /// Commit message file passed by git
    pub msg_file: PathBuf,

    /// Print the rewritten message without writing it
    #[arg(short = 'n', long)]
    pub dry_run: bool,

    /// Configuration file (defaults to the nearest smartcommit.toml)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub tracker: TrackerArgs,
}

/// Issue tracker connection settings.
#[derive(Debug, Args)]
pub struct TrackerArgs {
    /// Tracker account email
    #[arg(long, env = "JIRA_EMAIL")]
    pub email: Option<String>,

    /// Tracker API token
    #[arg(long, env = "JIRA_API_TOKEN", hide_env_values = true)]
    pub api_token: Option<String>,

    /// Tracker site URL (overrides [tracker] base_url)
    #[arg(long, env = "JIRA_BASE_URL")]
    pub base_url: Option<String>,
}

/// Runs the hook command.
pub fn run(args: HookArgs) -> Result<()> {
    let config = super::load_config(args.config.as_deref())?;

    let branch = current_branch();
    println!(
        "Current branch: {}",
        if branch.is_empty() { "<unknown>" } else { branch.as_str() }
    );
    BranchPolicy::from_config(&config.branch).check(&branch)?;

    let store = CommitMessageStore::open(&args.msg_file)?;
    let compiler = with_tracker(CommitCompiler::from_config(&config)?, args.tracker, &config)?;

    let runtime = tokio::runtime::Runtime::new().context("failed to create async runtime")?;
    let commit = if args.dry_run {
        let raw = store.read()?;
        runtime.block_on(compiler.compile(&raw))?
    } else {
        runtime.block_on(compiler.rewrite(&store))?
    };

    info!(key = %commit.issue_key, dry_run = args.dry_run, "smart commit accepted");
    println!("{commit}");

    Ok(())
}

/// Attaches the subtask gate when the tracker is fully configured.
///
/// Otherwise records what is missing, so a gated transition fails with a
/// useful message.
fn with_tracker(
    compiler: CommitCompiler<JiraClient>,
    args: TrackerArgs,
    config: &Config,
) -> Result<CommitCompiler<JiraClient>> {
    let Some(base_url) = non_blank(args.base_url).or_else(|| config.tracker.base_url.clone())
    else {
        debug!("no tracker base URL");
        return Ok(compiler.without_gate(
            "no tracker URL is configured (set JIRA_BASE_URL or [tracker] base_url)",
        ));
    };
    let Some(email) = non_blank(args.email) else {
        return Ok(compiler.without_gate("JIRA_EMAIL is not set"));
    };
    let Some(api_token) = non_blank(args.api_token) else {
        return Ok(compiler.without_gate("JIRA_API_TOKEN is not set"));
    };

    let client = JiraClient::new(base_url, Credentials::new(email, api_token))
        .context("failed to create tracker client")?;
    Ok(compiler.with_gate(SubtaskGate::new(client)))
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.trim().is_empty())
}
