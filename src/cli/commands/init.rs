use std::fs;

use anyhow::{Context, Result};
use colored::Colorize;

use super::super::{args::InitCommand, exit_status::ExitStatus, report};
use crate::config::{CONFIG_FILE_NAME, default_config_json};

/// Write the default configuration into `--path`, never replacing an existing one.
pub fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = cmd.common.path.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        report::print_refusal(&format!("{} already exists", config_path.display()));
        return Ok(ExitStatus::Error);
    }

    fs::write(&config_path, default_config_json()?)
        .with_context(|| format!("Failed to write {}", config_path.display()))?;
    println!(
        "{} {}",
        report::SUCCESS_MARK.green(),
        format!("Created {}", config_path.display()).green()
    );

    Ok(ExitStatus::Success)
}
