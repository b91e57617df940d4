pub mod include_guards;
pub mod indentation;
pub mod line_length;
pub mod namespace_comments;
pub mod tabs;
pub mod trailing_whitespace;

use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::LinterConfig;
use crate::error::LintError;
use crate::source::SourceFile;

/// One formatting violation. `line` is 1-indexed; file-level issues have none.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub path: PathBuf,
    pub line: Option<usize>,
    pub message: String,
}

impl Issue {
    pub fn at_line(file: &SourceFile, line: usize, message: impl Into<String>) -> Self {
        Self {
            path: file.rel_path.clone(),
            line: Some(line),
            message: message.into(),
        }
    }

    pub fn for_file(file: &SourceFile, message: impl Into<String>) -> Self {
        Self {
            path: file.rel_path.clone(),
            line: None,
            message: message.into(),
        }
    }

    pub fn read_failure(file: &SourceFile, err: &LintError) -> Self {
        Self::for_file(file, err.to_string())
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.line {
            Some(line) => write!(f, "{}:{}: {}", self.path.display(), line, self.message),
            None => write!(f, "{}: {}", self.path.display(), self.message),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct CheckResult {
    pub name: String,
    pub passed: bool,
    pub issues: Vec<Issue>,
}

/// A check inspects one file and reports what it found in it.
pub type CheckFn = fn(&LinterConfig, &SourceFile) -> Vec<Issue>;

pub struct CheckDef {
    pub name: &'static str,
    pub run: CheckFn,
}

/// Every check, in reporting order.
pub const ALL: &[CheckDef] = &[
    CheckDef {
        name: line_length::NAME,
        run: line_length::check,
    },
    CheckDef {
        name: trailing_whitespace::NAME,
        run: trailing_whitespace::check,
    },
    CheckDef {
        name: tabs::NAME,
        run: tabs::check,
    },
    CheckDef {
        name: include_guards::NAME,
        run: include_guards::check,
    },
    CheckDef {
        name: namespace_comments::NAME,
        run: namespace_comments::check,
    },
    CheckDef {
        name: indentation::NAME,
        run: indentation::check,
    },
];

impl CheckDef {
    /// Run this check over the whole file set, keeping file order.
    pub fn run_all(&self, config: &LinterConfig, files: &[SourceFile]) -> CheckResult {
        let issues: Vec<Issue> = files.iter().flat_map(|file| (self.run)(config, file)).collect();
        CheckResult {
            name: self.name.to_string(),
            passed: issues.is_empty(),
            issues,
        }
    }
}
