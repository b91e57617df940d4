use crate::checks::Issue;
use crate::config::LinterConfig;
use crate::source::{self, SourceFile};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME: &str = "Indentation";

const INDENT_WIDTH: usize = 4;

/// Any punctuation or operator marks a line as alignment/continuation.
static ALIGNMENT_MARK: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\w\s]").unwrap());

pub fn check(_config: &LinterConfig, file: &SourceFile) -> Vec<Issue> {
    let content = match file.read() {
        Ok(c) => c,
        Err(e) => return vec![Issue::read_failure(file, &e)],
    };

    match first_misindented_line(&content) {
        Some(line) => vec![Issue::at_line(
            file,
            line,
            "Inconsistent indentation (not multiple of 4)",
        )],
        None => vec![],
    }
}

/// Only the first offending line per file is reported.
fn first_misindented_line(content: &str) -> Option<usize> {
    for (i, line) in source::split_lines(content).into_iter().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let body = line.trim_start_matches(' ');
        let leading = line.len() - body.len();
        if leading == 0 || leading % INDENT_WIDTH == 0 {
            continue;
        }
        if !ALIGNMENT_MARK.is_match(body) {
            return Some(i + 1);
        }
    }
    None
}
