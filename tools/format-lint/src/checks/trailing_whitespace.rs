use crate::checks::Issue;
use crate::config::LinterConfig;
use crate::source::{self, SourceFile};

pub const NAME: &str = "Trailing whitespace";

pub fn check(_config: &LinterConfig, file: &SourceFile) -> Vec<Issue> {
    let content = match file.read() {
        Ok(c) => c,
        Err(e) => return vec![Issue::read_failure(file, &e)],
    };

    lines_with_trailing_whitespace(&content)
        .into_iter()
        .map(|line| Issue::at_line(file, line, "Trailing whitespace"))
        .collect()
}

fn lines_with_trailing_whitespace(content: &str) -> Vec<usize> {
    source::split_lines(content)
        .into_iter()
        .enumerate()
        .filter(|(_, line)| *line != line.trim_end())
        .map(|(i, _)| i + 1)
        .collect()
}
