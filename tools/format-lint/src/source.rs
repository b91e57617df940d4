use std::fs;
use std::path::{Path, PathBuf};

use crate::error::LintError;

/// A discovered C++ file. `rel_path` is what issues print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceFile {
    pub path: PathBuf,
    pub rel_path: PathBuf,
}

impl SourceFile {
    pub fn new(path: PathBuf, root_dir: &Path) -> Self {
        let rel_path = path.strip_prefix(root_dir).unwrap_or(&path).to_path_buf();
        Self { path, rel_path }
    }

    /// Read the whole file as UTF-8. Every check calls this on its own, so no
    /// handle outlives a single check.
    pub fn read(&self) -> Result<String, LintError> {
        fs::read_to_string(&self.path).map_err(|source| LintError::FileRead { source })
    }
}

/// Split text into lines without their terminators. `\n`, `\r\n` and a lone
/// `\r` each end a line; a final line without a terminator is kept.
pub fn split_lines(content: &str) -> Vec<&str> {
    let bytes = content.as_bytes();
    let mut lines = Vec::new();
    let mut start = 0;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'\n' => {
                lines.push(&content[start..i]);
                i += 1;
                start = i;
            }
            b'\r' => {
                lines.push(&content[start..i]);
                i += if bytes.get(i + 1) == Some(&b'\n') { 2 } else { 1 };
                start = i;
            }
            _ => i += 1,
        }
    }
    if start < content.len() {
        lines.push(&content[start..]);
    }
    lines
}
