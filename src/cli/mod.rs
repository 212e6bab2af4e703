//! Command-line layer: argument parsing, project scanning and reporting.

use anyhow::Result;

mod args;
mod commands;
mod exit_status;
mod logging;
mod report;
mod scan;

pub use args::{Arguments, Command, PrintCommand, StripCommand, TransformArgs};
pub use exit_status::ExitStatus;
pub use logging::{LOG_ENV, init_logging};

use commands::{init::init, print::print, strip::strip};

pub fn run_cli(args: Arguments) -> Result<ExitStatus> {
    let Some(args) = args.with_command_or_help() else {
        return Ok(ExitStatus::Success);
    };

    match args.command {
        Some(Command::Strip(cmd)) => strip(cmd),
        Some(Command::Print(cmd)) => print(cmd),
        Some(Command::Init) => init(),
        None => Ok(ExitStatus::Success),
    }
}
