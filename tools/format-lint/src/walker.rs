use crate::config::LinterConfig;
use crate::error::LintError;
use crate::source::SourceFile;
use std::fs;
use std::path::{Path, PathBuf};

/// Collect every C++ file under the configured source roots, ordered by the
/// plain string of the root-relative path (so `core-impl.cpp` sorts before
/// `core/a.cpp`). Roots that don't exist are skipped; an empty result is not
/// an error here.
pub fn collect_source_files(config: &LinterConfig) -> Vec<SourceFile> {
    let mut results = Vec::new();
    for root in &config.source_roots {
        let dir = config.root_dir.join(root);
        if dir.is_dir() {
            collect_files_inner(&dir, config, &mut results);
        }
    }
    let mut files: Vec<SourceFile> = results
        .into_iter()
        .map(|path| SourceFile::new(path, &config.root_dir))
        .collect();
    files.sort_by(|a, b| a.rel_path.as_os_str().cmp(b.rel_path.as_os_str()));
    files
}

/// Like `collect_source_files`, but an empty file set is fatal.
pub fn discover(config: &LinterConfig) -> Result<Vec<SourceFile>, LintError> {
    let files = collect_source_files(config);
    if files.is_empty() {
        return Err(LintError::NoFilesDiscovered {
            roots: config.source_roots.join(", "),
        });
    }
    Ok(files)
}

fn collect_files_inner(dir: &Path, config: &LinterConfig, results: &mut Vec<PathBuf>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return,
    };

    for entry in entries.flatten() {
        let file_type = match entry.file_type() {
            Ok(t) => t,
            Err(_) => continue,
        };
        let path = entry.path();
        // Symlinked directories are not followed, so link cycles can't recurse forever.
        if file_type.is_dir() {
            collect_files_inner(&path, config, results);
        } else if path.is_file() && config.is_source(&path) {
            results.push(path);
        }
    }
}
