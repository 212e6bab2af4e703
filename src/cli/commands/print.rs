use std::{env, fs};

use anyhow::{Context, Result};
use colored::Colorize;

use crate::cli::{args::PrintCommand, exit_status::ExitStatus};
use crate::config::load_config;
use crate::core::KeepConsole;

/// Transform one file and write the result to stdout. Files the options exclude are
/// printed unchanged.
pub fn print(cmd: PrintCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read the working directory")?;
    let config = load_config(&cwd)?.config;
    let transform = KeepConsole::new(cmd.transform.options(&config));

    let code = fs::read_to_string(&cmd.file)
        .with_context(|| format!("Failed to read {}", cmd.file.display()))?;
    let id = cmd.file.to_string_lossy();

    match transform.transform(&code, &id) {
        Ok(output) => {
            print!("{}", output.code);
            Ok(ExitStatus::Success)
        }
        Err(err) => {
            eprintln!("{} {}", "error:".bold().red(), err);
            Ok(ExitStatus::Failure)
        }
    }
}
