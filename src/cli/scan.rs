use std::path::{Path, PathBuf};

use glob::Pattern;
use walkdir::WalkDir;

use crate::core::FileKind;

/// Files found under a source root.
pub struct ScanResult {
    /// Supported source files, sorted for stable output.
    pub files: Vec<PathBuf>,
    /// Entries that could not be read while walking.
    pub skipped_count: usize,
}

/// Check if a pattern contains glob wildcards (* or ?).
/// Patterns without wildcards are treated as literal paths below the root.
fn is_glob_pattern(pattern: &str) -> bool {
    pattern.contains('*') || pattern.contains('?')
}

pub fn scan_files(root: &Path, ignore_patterns: &[String]) -> ScanResult {
    let mut literal_ignore_paths: Vec<PathBuf> = Vec::new();
    let mut glob_patterns: Vec<Pattern> = Vec::new();

    for p in ignore_patterns {
        if is_glob_pattern(p) {
            match Pattern::new(p) {
                Ok(pattern) => glob_patterns.push(pattern),
                Err(e) => tracing::warn!(pattern = %p, error = %e, "invalid ignore pattern"),
            }
        } else {
            literal_ignore_paths.push(root.join(p));
        }
    }

    let mut files = Vec::new();
    let mut skipped_count = 0;

    let walker = WalkDir::new(root).into_iter().filter_entry(|entry| {
        let path = entry.path();
        !literal_ignore_paths.iter().any(|ignored| path.starts_with(ignored))
    });

    for entry in walker {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                skipped_count += 1;
                tracing::warn!(error = %e, "cannot access path");
                continue;
            }
        };
        let path = entry.path();
        let path_str = path.to_string_lossy();

        if glob_patterns.iter().any(|p| p.matches(&path_str)) {
            continue;
        }

        if entry.file_type().is_file() && FileKind::from_path(&path_str).is_some() {
            files.push(path.to_path_buf());
        }
    }

    files.sort();
    ScanResult {
        files,
        skipped_count,
    }
}
