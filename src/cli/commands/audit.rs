use anyhow::{Context, Result};

use super::super::{args::AuditCommand, exit_status::ExitStatus, report};
use crate::{
    core::Workspace,
    issues::AuditCheck,
    rules::{AuditInput, run_audit},
};

pub fn audit(cmd: AuditCommand) -> Result<ExitStatus> {
    let checks = if cmd.checks.is_empty() {
        AuditCheck::all()
    } else {
        cmd.checks
    };

    let workspace = Workspace::load(&cmd.common.path)?;
    let store = workspace.catalog_store();
    let catalog = store.load()?;

    // Only the unused check looks at the source tree
    let files = if checks.contains(&AuditCheck::Unused) {
        workspace
            .scan_sources()
            .context("Failed to scan source tree")?
    } else {
        Vec::new()
    };

    let catalog_name = store.file_name();
    let policy = workspace.config.key_policy();
    let input = AuditInput {
        catalog: &catalog,
        files: &files,
        accessor: &workspace.config.accessor(),
        policy: &policy,
        catalog_name: &catalog_name,
    };

    let outcomes = run_audit(&input, &checks);
    report::print_audit(&outcomes);

    if outcomes.iter().all(|o| o.passed()) {
        Ok(ExitStatus::Success)
    } else {
        Ok(ExitStatus::Failure)
    }
}
