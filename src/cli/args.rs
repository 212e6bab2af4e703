//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `strip`: Remove unmarked console calls from every source file under a root
//! - `print`: Print the transformed code of one file
//! - `init`: Initialize a `.keepconsolerc.json` configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::config::Config;
use crate::core::{KeepConsoleOptions, PathFilter};

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

    /// Get the verbose flag from the command's transform args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Strip(cmd)) => cmd.transform.verbose,
            Some(Command::Print(cmd)) => cmd.transform.verbose,
            Some(Command::Init) | None => false,
        }
    }
}

/// Transform options shared by all commands that run the transform.
#[derive(Debug, Clone, Args)]
pub struct TransformArgs {
    /// Console members to strip (overrides config; default: all)
    /// Can be specified multiple times: --includes log --includes debug
    #[arg(long, value_name = "NAME")]
    pub includes: Vec<String>,

    /// Comment text that keeps a call (overrides config; default: keep-console)
    #[arg(long = "keep-comment", value_name = "MARKER")]
    pub keep_comments: Vec<String>,

    /// Only transform paths matching this filter (overrides config)
    /// A value starting with `re:` is a regular expression, anything else a substring
    #[arg(long, value_name = "FILTER", value_parser = parse_path_filter)]
    pub external: Vec<PathFilter>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl TransformArgs {
    /// Merge with `config`: any option given on the command line replaces the
    /// config file's value for that option.
    pub fn options(&self, config: &Config) -> KeepConsoleOptions {
        let defaults = config.options();
        KeepConsoleOptions {
            includes: prefer(&self.includes, defaults.includes),
            external: prefer(&self.external, defaults.external),
            keep_comments: prefer(&self.keep_comments, defaults.keep_comments),
        }
    }
}

fn prefer<T: Clone>(cli: &[T], fallback: Vec<T>) -> Vec<T> {
    if cli.is_empty() {
        fallback
    } else {
        cli.to_vec()
    }
}

fn parse_path_filter(value: &str) -> Result<PathFilter, String> {
    PathFilter::parse_cli(value).map_err(|e| format!("invalid regex: {}", e))
}

#[derive(Debug, Args)]
pub struct StripCommand {
    #[command(flatten)]
    pub transform: TransformArgs,

    /// Source code root directory (overrides config file)
    #[arg(long)]
    pub source_root: Option<PathBuf>,

    /// Actually rewrite files (default is dry-run)
    #[arg(long)]
    pub apply: bool,

    /// Write a `<file>.map` source map next to each rewritten file
    #[arg(long, requires = "apply")]
    pub source_map: bool,
}

#[derive(Debug, Args)]
pub struct PrintCommand {
    /// File to transform
    pub file: PathBuf,

    #[command(flatten)]
    pub transform: TransformArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Remove console calls without a keep comment from the project's sources
    Strip(StripCommand),
    /// Print the transformed code of a single file to stdout
    Print(PrintCommand),
    /// Initialize a new .keepconsolerc.json configuration file
    Init,
}
