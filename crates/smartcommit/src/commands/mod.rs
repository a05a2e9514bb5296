//! Subcommands.

pub mod check;
pub mod hook;
pub mod init;

use std::path::Path;

use anyhow::{Context, Result};
use smartcommit_config::{Config, load_or_default};

/// Loads the explicit configuration file, or the nearest `smartcommit.toml`,
/// or the defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    load_or_default(explicit).context("failed to load configuration")
}
