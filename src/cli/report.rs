//! Report formatting and printing for the `strip` command.
//!
//! Kept apart from the transform so the library never writes to stdout.

use std::{
    io::{self, Write},
    path::PathBuf,
};

use colored::Colorize;

use crate::cli::exit_status::ExitStatus;
use crate::core::RewriteSummary;

/// Success mark for consistent output formatting.
pub const SUCCESS_MARK: &str = "\u{2713}"; // ✓

/// Failure mark for consistent output formatting.
pub const FAILURE_MARK: &str = "\u{2718}"; // ✘

/// What happened to one scanned file.
#[derive(Debug)]
pub enum FileOutcome {
    /// At least one call was (or would be) removed.
    Stripped {
        path: PathBuf,
        summary: RewriteSummary,
    },
    /// Parsed, but nothing to remove.
    Unchanged { retained: usize },
    /// Rejected by the `external` filters.
    Excluded,
    /// The file could not be read or did not parse.
    Failed { path: PathBuf, message: String },
}

pub struct StripReport {
    pub outcomes: Vec<FileOutcome>,
    pub files_scanned: usize,
    pub skipped_entries: usize,
    /// False for a dry run.
    pub applied: bool,
}

impl StripReport {
    fn stripped(&self) -> impl Iterator<Item = (&PathBuf, &RewriteSummary)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Stripped { path, summary } => Some((path, summary)),
            _ => None,
        })
    }

    fn failures(&self) -> impl Iterator<Item = (&PathBuf, &str)> {
        self.outcomes.iter().filter_map(|outcome| match outcome {
            FileOutcome::Failed { path, message } => Some((path, message.as_str())),
            _ => None,
        })
    }

    pub fn removed_calls(&self) -> usize {
        self.stripped().map(|(_, summary)| summary.stripped()).sum()
    }

    pub fn retained_calls(&self) -> usize {
        self.outcomes
            .iter()
            .map(|outcome| match outcome {
                FileOutcome::Stripped { summary, .. } => summary.retained_calls,
                FileOutcome::Unchanged { retained } => *retained,
                _ => 0,
            })
            .sum()
    }

    pub fn exit_status(&self) -> ExitStatus {
        if self.failures().next().is_some() {
            ExitStatus::Failure
        } else {
            ExitStatus::Success
        }
    }
}

pub fn print_strip_report(report: &StripReport, verbose: bool) {
    print_strip_report_to(
        report,
        verbose,
        &mut io::stdout().lock(),
        &mut io::stderr().lock(),
    );
}

/// Per-file lines and the summary go to `out`; read and parse failures go to `err`.
pub fn print_strip_report_to<O: Write, E: Write>(
    report: &StripReport,
    verbose: bool,
    out: &mut O,
    err: &mut E,
) {
    for (path, summary) in report.stripped() {
        let _ = write!(
            out,
            "{}: {}",
            path.display().to_string().bold(),
            plural(summary.stripped(), "console call")
        );
        if verbose && summary.retained_calls > 0 {
            let _ = write!(out, " ({} kept)", summary.retained_calls);
        }
        let _ = writeln!(out);
    }

    for (_, message) in report.failures() {
        let _ = writeln!(err, "{} {}", "error:".bold().red(), message);
    }
    if report.skipped_entries > 0 {
        let _ = writeln!(
            err,
            "{} {} could not be read",
            "warning:".bold().yellow(),
            plural(report.skipped_entries, "path")
        );
    }

    let files_changed = report.stripped().count();
    let removed = report.removed_calls();
    let scanned = plural(report.files_scanned, "file");
    let kept = match report.retained_calls() {
        0 => String::new(),
        retained => format!(", {} kept", retained),
    };

    let summary = if removed == 0 {
        format!("Checked {}{} - no console calls to remove", scanned, kept)
    } else if report.applied {
        format!(
            "Removed {} from {} ({} checked{})",
            plural(removed, "console call"),
            plural(files_changed, "file"),
            scanned,
            kept
        )
    } else {
        format!(
            "Would remove {} from {} ({} checked{}, use --apply to rewrite)",
            plural(removed, "console call"),
            plural(files_changed, "file"),
            scanned,
            kept
        )
    };

    let failed = report.failures().count();
    if failed > 0 {
        let _ = writeln!(out, "{} {}", FAILURE_MARK.red(), summary.red());
        let _ = writeln!(
            err,
            "{} {} could not be processed",
            FAILURE_MARK.red(),
            plural(failed, "file")
        );
    } else {
        let _ = writeln!(out, "{} {}", SUCCESS_MARK.green(), summary.green());
    }
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("{} {}", count, noun)
    } else {
        format!("{} {}s", count, noun)
    }
}
