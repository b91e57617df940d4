use crate::checks::Issue;
use crate::config::LinterConfig;
use crate::source::SourceFile;

pub const NAME: &str = "Tab characters";

/// At most one issue per file, however many tabs it has.
pub fn check(_config: &LinterConfig, file: &SourceFile) -> Vec<Issue> {
    match file.read() {
        Ok(content) if content.contains('\t') => {
            vec![Issue::for_file(file, "Contains tab characters")]
        }
        Ok(_) => vec![],
        Err(e) => vec![Issue::read_failure(file, &e)],
    }
}
