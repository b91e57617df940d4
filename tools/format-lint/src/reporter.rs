use std::io::{self, Write};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::checks::CheckResult;
use crate::report::Report;

pub fn print_header(out: &mut impl Write) {
    writeln!(
        out,
        "{}",
        "\u{1f50d} Validating C++ code formatting...".if_supports_color(Stdout, |s| s.blue())
    )
    .ok();
}

pub fn print_file_count(out: &mut impl Write, count: usize) {
    writeln!(out, "Found {} C++ files to validate", count).ok();
}

pub fn print_no_files(out: &mut impl Write) {
    writeln!(
        out,
        "{}",
        "\u{274c} No C++ files found!".if_supports_color(Stdout, |s| s.red())
    )
    .ok();
}

pub fn print_check_start(out: &mut impl Write, name: &str) {
    writeln!(out, "\u{2022} Checking {}...", name.to_lowercase()).ok();
}

/// Status line plus the first `preview_limit` issues.
pub fn print_result(out: &mut impl Write, result: &CheckResult, preview_limit: usize) {
    if result.passed {
        writeln!(
            out,
            "{}",
            "  \u{2705} No issues found".if_supports_color(Stdout, |s| s.green())
        )
        .ok();
        return;
    }

    writeln!(
        out,
        "{}",
        format!("  \u{26a0}\u{fe0f}  Found {} issues", result.issues.len())
            .if_supports_color(Stdout, |s| s.yellow())
    )
    .ok();
    for issue in result.issues.iter().take(preview_limit) {
        writeln!(out, "    {}", issue).ok();
    }
    if result.issues.len() > preview_limit {
        writeln!(out, "    ... and {} more", result.issues.len() - preview_limit).ok();
    }
}

pub fn print_summary(out: &mut impl Write, report: &Report) {
    writeln!(out).ok();
    writeln!(out, "=== Summary ===").ok();

    if report.passed() {
        writeln!(
            out,
            "{}",
            "\u{2705} All formatting checks passed!".if_supports_color(Stdout, |s| s.green())
        )
        .ok();
        writeln!(out, "The code should pass clang-format checks in CI.").ok();
        return;
    }

    writeln!(
        out,
        "{}",
        format!("\u{26a0}\u{fe0f}  Found {} formatting issues", report.total_issues)
            .if_supports_color(Stdout, |s| s.yellow())
    )
    .ok();
    writeln!(out).ok();
    writeln!(out, "Common fixes:").ok();
    for fix in [
        "Run 'make format' to auto-fix most formatting issues",
        "Ensure lines are under 100 characters",
        "Use 4 spaces for indentation (no tabs)",
        "Add namespace closing comments for long namespaces",
        "Remove trailing whitespace",
    ] {
        writeln!(out, "  \u{2022} {}", fix).ok();
    }
}

pub fn print_json(out: &mut impl Write, report: &Report) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, report)?;
    writeln!(out)
}
