//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `consolidate`: Merge superseded keys into canonical ones and rewrite call sites
//! - `delete`: Remove a batch of keys from the catalog
//! - `audit`: Report unused keys, duplicate values, and naming violations
//! - `init`: Initialize msgtidy configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::issues::AuditCheck;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by the catalog commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Directory to start looking for .msgtidyrc.json from
    #[arg(long, default_value = ".")]
    pub path: PathBuf,
}

#[derive(Debug, Args)]
pub struct ConsolidateCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report every change without writing any file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// Keys to delete
    pub keys: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,

    /// Report what would be deleted without writing the catalog
    #[arg(long)]
    pub dry_run: bool,

    /// Also read newline-delimited keys from standard input.
    /// Accepts the `audit unused` report verbatim. Pipe only that check: the
    /// duplicates and key-format reports list keys the same way, and every
    /// one of them would be deleted.
    #[arg(long)]
    pub stdin: bool,
}

#[derive(Debug, Args)]
pub struct AuditCommand {
    /// Checks to run (default: all)
    #[arg(value_enum)]
    pub checks: Vec<AuditCheck>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Merge duplicate keys into shared keys, rewriting every call site
    Consolidate(ConsolidateCommand),
    /// Delete translation keys (refuses to remove more than half the catalog)
    Delete(DeleteCommand),
    /// Check the catalog for unused keys, duplicate values, and naming issues
    Audit(AuditCommand),
    /// Initialize a new .msgtidyrc.json configuration file
    Init(InitCommand),
}
