pub mod checks;
pub mod config;
pub mod error;
pub mod report;
pub mod reporter;
pub mod source;
pub mod walker;

use config::LinterConfig;
use report::Report;
use source::SourceFile;

/// Run every check over the same file set and collect the results.
pub fn run_all_checks(config: &LinterConfig, files: &[SourceFile]) -> Report {
    let results = checks::ALL
        .iter()
        .map(|check| check.run_all(config, files))
        .collect();
    Report::new(files.len(), results, config.exit_code_cap)
}
