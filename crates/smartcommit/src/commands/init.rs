//! Initialize command.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use clap::Args;
use tracing::debug;

use smartcommit_config::CONFIG_FILE_NAME;
use smartcommit_git::Repository;

const CONFIG_TEMPLATE: &str = r#"# Smartcommit configuration

[project]
# Issue keys are matched as <key>-<number>, case-insensitively.
key = "CCPD1"

[tracker]
# Jira site URL. JIRA_BASE_URL overrides it. Credentials are read from
# JIRA_EMAIL and JIRA_API_TOKEN, never from this file.
# base_url = "https://example.atlassian.net"

[gate]
# Reject a transition while the issue has subtasks that are not done.
enabled = true
# Transitions the gate applies to. Empty gates every transition.
transitions = []

[policy]
require_comment = false
require_transition = false

[branch]
# Branches commits are allowed on. Empty allows every branch.
allowed = []
"#;

const HOOK_SCRIPT: &str = "#!/bin/sh\n# Installed by `smartcommit init --hook`\nexec smartcommit hook \"$1\"\n";

/// Arguments for the init command.
#[derive(Debug, Args)]
pub struct InitArgs {
    /// Force overwrite existing configuration
    #[arg(short, long)]
    pub force: bool,

    /// Also install the commit-msg hook into the current repository
    #[arg(long)]
    pub hook: bool,
}

/// Runs the init command.
pub fn run(args: &InitArgs) -> Result<()> {
    let config_path = Path::new(CONFIG_FILE_NAME);
    if config_path.exists() && !args.force {
        bail!("{CONFIG_FILE_NAME} already exists (use --force to overwrite)");
    }
    fs::write(config_path, CONFIG_TEMPLATE)
        .with_context(|| format!("failed to write {CONFIG_FILE_NAME}"))?;
    println!("Created {CONFIG_FILE_NAME}");

    if args.hook {
        install_hook(args.force)?;
    }

    Ok(())
}

fn install_hook(force: bool) -> Result<()> {
    let repo = Repository::discover().context("cannot install hook outside a git repository")?;
    let hooks_dir = repo.hooks_dir();
    fs::create_dir_all(&hooks_dir)
        .with_context(|| format!("failed to create {}", hooks_dir.display()))?;

    let hook_path = hooks_dir.join("commit-msg");
    if hook_path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            hook_path.display()
        );
    }
    fs::write(&hook_path, HOOK_SCRIPT)
        .with_context(|| format!("failed to write {}", hook_path.display()))?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&hook_path, fs::Permissions::from_mode(0o755))
            .with_context(|| format!("failed to make {} executable", hook_path.display()))?;
    }

    debug!(path = ?hook_path, "hook installed");
    println!("Installed {}", hook_path.display());
    Ok(())
}
