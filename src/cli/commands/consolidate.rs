use anyhow::{Context, Result};

use super::super::{args::ConsolidateCommand, exit_status::ExitStatus, report};
use crate::core::{Workspace, consolidate::find_overlaps};

pub fn consolidate(cmd: ConsolidateCommand) -> Result<ExitStatus> {
    let workspace = Workspace::load(&cmd.common.path)?;
    let rules = workspace.consolidation_rules();

    report::print_overlaps(&find_overlaps(&rules));

    let store = workspace.catalog_store();
    let mut catalog = store.load()?;
    let mut files = workspace
        .scan_sources()
        .context("Failed to scan source tree")?;

    let result = crate::core::consolidate(
        &mut catalog,
        &store,
        &mut files,
        &rules,
        &workspace.config.accessor(),
        cmd.dry_run,
    )?;

    report::print_consolidation(&result);
    Ok(ExitStatus::Success)
}
