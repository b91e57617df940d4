use crate::checks::Issue;
use crate::config::LinterConfig;
use crate::source::{self, SourceFile};
use regex::Regex;
use std::sync::LazyLock;

pub const NAME: &str = "Namespace comments";

static NAMESPACE_OPEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^namespace\s+(\w+)").unwrap());

/// `} // namespace foo` or `}  // namespace foo`; anything may follow the name.
static NAMESPACE_CLOSE_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\} {1,2}// namespace \w+").unwrap());

pub fn check(config: &LinterConfig, file: &SourceFile) -> Vec<Issue> {
    let content = match file.read() {
        Ok(c) => c,
        Err(e) => return vec![Issue::read_failure(file, &e)],
    };

    uncommented_closings(&content, config.namespace_short_span)
        .into_iter()
        .map(|line| Issue::at_line(file, line, "Missing namespace closing comment"))
        .collect()
}

/// Line numbers of closing braces that end a long namespace without a comment.
///
/// Any `}` or `} ...` line pops the innermost open namespace, whether or not
/// the brace actually belongs to it. A function body closing inside a
/// namespace therefore consumes that namespace's entry.
fn uncommented_closings(content: &str, short_span: usize) -> Vec<usize> {
    let mut open: Vec<(String, usize)> = Vec::new();
    let mut flagged = Vec::new();

    for (i, line) in source::split_lines(content).into_iter().enumerate() {
        let line_num = i + 1;
        let stripped = line.trim();

        if let Some(caps) = NAMESPACE_OPEN.captures(stripped) {
            open.push((caps[1].to_string(), line_num));
        }

        if stripped != "}" && !stripped.starts_with("} ") {
            continue;
        }
        let Some((_name, opened_at)) = open.pop() else {
            continue;
        };
        if line_num - opened_at > short_span && !NAMESPACE_CLOSE_COMMENT.is_match(stripped) {
            flagged.push(line_num);
        }
    }

    flagged
}
