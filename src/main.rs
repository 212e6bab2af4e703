use std::process::ExitCode;

use clap::Parser;
use keep_console::cli::{Arguments, ExitStatus, init_logging, run_cli};

fn main() -> ExitCode {
    let args = Arguments::parse();

    if let Err(err) = init_logging(args.verbose()) {
        eprintln!("Error: {:#}", err);
        return ExitStatus::Error.into();
    }

    match run_cli(args) {
        Ok(status) => status.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            ExitStatus::Error.into()
        }
    }
}
