use crate::checks::Issue;
use crate::config::LinterConfig;
use crate::source::{self, SourceFile};

pub const NAME: &str = "Line length";

pub fn check(config: &LinterConfig, file: &SourceFile) -> Vec<Issue> {
    let content = match file.read() {
        Ok(c) => c,
        Err(e) => return vec![Issue::read_failure(file, &e)],
    };

    long_lines(&content, config.max_line_length)
        .into_iter()
        .map(|(line, len)| {
            Issue::at_line(
                file,
                line,
                format!("Line too long ({} > {})", len, config.max_line_length),
            )
        })
        .collect()
}

/// `(line number, length)` for each line longer than `max`. Only the line
/// terminator is excluded from the length; trailing spaces count.
fn long_lines(content: &str, max: usize) -> Vec<(usize, usize)> {
    source::split_lines(content)
        .into_iter()
        .enumerate()
        .filter_map(|(i, line)| {
            let len = line.chars().count();
            (len > max).then_some((i + 1, len))
        })
        .collect()
}
