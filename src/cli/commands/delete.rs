use std::io::{self, Read};

use anyhow::{Context, Result};

use super::super::{args::DeleteCommand, exit_status::ExitStatus, report};
use crate::{
    core::{Workspace, delete_keys, parse_key_batch},
    error::CatalogError,
};

pub fn delete(cmd: DeleteCommand) -> Result<ExitStatus> {
    let mut keys = cmd.keys;
    if cmd.stdin {
        let mut input = String::new();
        io::stdin()
            .read_to_string(&mut input)
            .context("Failed to read keys from standard input")?;
        keys.extend(parse_key_batch(&input));
    }

    if keys.is_empty() {
        report::print_delete_usage();
        return Ok(ExitStatus::Error);
    }

    let workspace = Workspace::load(&cmd.common.path)?;
    let store = workspace.catalog_store();
    let mut catalog = store.load()?;

    match delete_keys(&mut catalog, &store, &keys, cmd.dry_run) {
        Ok(result) => {
            report::print_deletion(&result, store.path());
            Ok(ExitStatus::Success)
        }
        Err(err @ CatalogError::SafetyThresholdExceeded { .. }) => {
            report::print_refusal(&err.to_string());
            Ok(ExitStatus::Failure)
        }
        Err(err) => Err(err.into()),
    }
}
