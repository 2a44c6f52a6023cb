//! Command-line interface layer.
//!
//! Commands load the workspace, call into `core`/`rules`, and hand the
//! returned reports to `report` for printing.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod report;

pub use args::{
    Arguments, AuditCommand, Command, CommonArgs, ConsolidateCommand, DeleteCommand, InitCommand,
};
pub use exit_status::ExitStatus;

use commands::{audit::audit, consolidate::consolidate, delete::delete, init::init};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(Arguments {
        command: Some(command),
    }) = args.with_command_or_help()
    else {
        return Ok(ExitStatus::Success);
    };

    match command {
        Command::Consolidate(cmd) => consolidate(cmd),
        Command::Delete(cmd) => delete(cmd),
        Command::Audit(cmd) => audit(cmd),
        Command::Init(cmd) => init(cmd),
    }
}
