use std::path::{Path, PathBuf};

/// Directories scanned for sources, relative to the root. Missing ones are skipped.
pub const SOURCE_ROOTS: &[&str] = &["src", "include", "examples", "tests"];

/// Extensions (without the dot) that mark a file as C++ source.
pub const SOURCE_EXTENSIONS: &[&str] = &["cpp", "hpp", "h", "cxx", "cc"];

/// Subset of `SOURCE_EXTENSIONS` that the include guard check applies to.
pub const HEADER_EXTENSIONS: &[&str] = &["hpp", "h"];

pub const MAX_LINE_LENGTH: usize = 100;

/// Namespaces closed within this many lines of their opening need no closing comment.
pub const NAMESPACE_SHORT_SPAN: usize = 10;

/// Issues printed per check before the rest are folded into "... and N more".
pub const PREVIEW_LIMIT: usize = 3;

pub const EXIT_CODE_CAP: usize = 10;

pub struct LinterConfig {
    pub root_dir: PathBuf,
    pub source_roots: Vec<&'static str>,
    pub extensions: Vec<&'static str>,
    pub header_extensions: Vec<&'static str>,
    pub max_line_length: usize,
    pub namespace_short_span: usize,
    pub preview_limit: usize,
    pub exit_code_cap: usize,
}

impl LinterConfig {
    pub fn from_root(root: &Path) -> Self {
        Self {
            root_dir: root.to_path_buf(),
            source_roots: SOURCE_ROOTS.to_vec(),
            extensions: SOURCE_EXTENSIONS.to_vec(),
            header_extensions: HEADER_EXTENSIONS.to_vec(),
            max_line_length: MAX_LINE_LENGTH,
            namespace_short_span: NAMESPACE_SHORT_SPAN,
            preview_limit: PREVIEW_LIMIT,
            exit_code_cap: EXIT_CODE_CAP,
        }
    }

    /// Use the current working directory as the root, like running the script in place.
    pub fn discover() -> Option<Self> {
        let dir = std::env::current_dir().ok()?;
        Some(Self::from_root(&dir))
    }

    pub fn is_source(&self, path: &Path) -> bool {
        has_extension(path, &self.extensions)
    }

    pub fn is_header(&self, path: &Path) -> bool {
        has_extension(path, &self.header_extensions)
    }
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| allowed.contains(&ext))
}
