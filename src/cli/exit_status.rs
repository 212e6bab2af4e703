use std::process::ExitCode;

/// Process exit status of the `keep-console` binary.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    /// Every scanned file was transformed (or needed no change).
    Success,
    /// The command ran, but at least one file could not be read or parsed, or the command
    /// refused to act (for example `init` over an existing config).
    Failure,
    /// The command could not run: bad config, unreadable root, I/O failure.
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Failure => ExitCode::from(1),
            ExitStatus::Error => ExitCode::from(2),
        }
    }
}
