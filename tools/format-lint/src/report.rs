use serde::Serialize;

use crate::checks::CheckResult;

/// Everything one run produced, in check order.
#[derive(Debug, Serialize)]
pub struct Report {
    pub file_count: usize,
    pub total_issues: usize,
    pub exit_code: i32,
    pub checks: Vec<CheckResult>,
}

impl Report {
    pub fn new(file_count: usize, checks: Vec<CheckResult>, exit_code_cap: usize) -> Self {
        let total_issues = checks.iter().map(|c| c.issues.len()).sum();
        Self {
            file_count,
            total_issues,
            exit_code: exit_code(total_issues, exit_code_cap),
            checks,
        }
    }

    pub fn passed(&self) -> bool {
        self.total_issues == 0
    }
}

/// 0 when clean, otherwise the issue count saturated at `cap`.
pub fn exit_code(total_issues: usize, cap: usize) -> i32 {
    let capped = total_issues.min(cap);
    i32::try_from(capped).unwrap_or(i32::MAX)
}
