use std::{
    env,
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use rayon::prelude::*;

use crate::cli::{
    args::StripCommand,
    exit_status::ExitStatus,
    report::{self, FileOutcome, StripReport},
    scan::scan_files,
};
use crate::config::{ConfigLoadResult, load_config};
use crate::core::KeepConsole;

/// How rewritten files are persisted.
#[derive(Debug, Clone, Copy)]
struct WriteMode {
    apply: bool,
    source_map: bool,
}

pub fn strip(cmd: StripCommand) -> Result<ExitStatus> {
    let cwd = env::current_dir().context("Failed to read the working directory")?;
    let ConfigLoadResult { config, from_file } = load_config(&cwd)?;
    tracing::debug!(from_file, "resolved configuration");

    let root = cmd
        .source_root
        .clone()
        .unwrap_or_else(|| PathBuf::from(&config.source_root));
    if !root.is_dir() {
        bail!("Source root is not a directory: {}", root.display());
    }

    let transform = KeepConsole::new(cmd.transform.options(&config));
    let mode = WriteMode {
        apply: cmd.apply,
        source_map: cmd.source_map,
    };

    let scan = scan_files(&root, &config.ignores);
    let outcomes = scan
        .files
        .par_iter()
        .map(|path| process_file(&transform, path, mode))
        .collect::<Result<Vec<_>>>()?;

    let report = StripReport {
        outcomes,
        files_scanned: scan.files.len(),
        skipped_entries: scan.skipped_count,
        applied: cmd.apply,
    };
    report::print_strip_report(&report, cmd.transform.verbose);

    Ok(report.exit_status())
}

fn process_file(transform: &KeepConsole, path: &Path, mode: WriteMode) -> Result<FileOutcome> {
    let id = path.to_string_lossy();
    if !transform.handles(&id) {
        return Ok(FileOutcome::Excluded);
    }

    let code = match fs::read_to_string(path) {
        Ok(code) => code,
        Err(err) => {
            return Ok(FileOutcome::Failed {
                path: path.to_path_buf(),
                message: format!("Failed to read {}: {}", path.display(), err),
            });
        }
    };

    let output = match transform.transform(&code, &id) {
        Ok(output) => output,
        Err(err) => {
            return Ok(FileOutcome::Failed {
                path: path.to_path_buf(),
                message: err.to_string(),
            });
        }
    };

    if output.summary.is_unchanged() {
        return Ok(FileOutcome::Unchanged {
            retained: output.summary.retained_calls,
        });
    }

    if mode.apply {
        let mut code = output.code;
        if mode.source_map
            && let Some(map) = &output.map
        {
            let map_path = map_path(path);
            fs::write(&map_path, map)
                .with_context(|| format!("Failed to write {}", map_path.display()))?;
            if let Some(name) = map_path.file_name() {
                code.push_str(&format!("//# sourceMappingURL={}\n", name.to_string_lossy()));
            }
        }
        fs::write(path, code).with_context(|| format!("Failed to write {}", path.display()))?;
    }

    Ok(FileOutcome::Stripped {
        path: path.to_path_buf(),
        summary: output.summary,
    })
}

/// `src/app.js` -> `src/app.js.map`
fn map_path(path: &Path) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".map");
    PathBuf::from(name)
}
