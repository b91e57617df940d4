use crate::checks::Issue;
use crate::config::LinterConfig;
use crate::source::SourceFile;
use regex::Regex;
use std::sync::LazyLock;

pub const NAME: &str = "Include guards";

static IFNDEF_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#ifndef\s+\w+").unwrap());

static DEFINE_PATTERN: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"#define\s+\w+").unwrap());

pub fn check(config: &LinterConfig, file: &SourceFile) -> Vec<Issue> {
    if !config.is_header(&file.path) {
        return vec![];
    }

    let content = match file.read() {
        Ok(c) => c,
        Err(e) => return vec![Issue::read_failure(file, &e)],
    };

    if has_guard(&content) {
        vec![]
    } else {
        vec![Issue::for_file(file, "Missing or incomplete include guards")]
    }
}

/// Presence test only: the three directives are searched for independently,
/// with no check that the names agree or that `#endif` closes the guard.
fn has_guard(content: &str) -> bool {
    if content.contains("#pragma once") {
        return true;
    }
    IFNDEF_PATTERN.is_match(content) && DEFINE_PATTERN.is_match(content) && content.contains("#endif")
}
