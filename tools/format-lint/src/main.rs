use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use format_lint::checks;
use format_lint::config::LinterConfig;
use format_lint::report::Report;
use format_lint::reporter;
use format_lint::walker;

/// Check C++ sources for formatting problems that would fail clang-format in CI.
#[derive(Parser)]
#[command(name = "format-lint", version)]
struct Cli {
    /// Project root holding src/, include/, examples/ and tests/ (defaults to the cwd)
    #[arg(long)]
    root_dir: Option<PathBuf>,

    /// Print the report as JSON instead of progress output
    #[arg(long)]
    json: bool,
}

fn main() {
    let cli = Cli::parse();

    let config = match cli.root_dir {
        Some(dir) => LinterConfig::from_root(&dir),
        None => match LinterConfig::discover() {
            Some(c) => c,
            None => {
                eprintln!("Error: Could not read the current directory. Use --root-dir.");
                process::exit(1);
            }
        },
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.json {
        reporter::print_header(&mut out);
    }

    let files = match walker::discover(&config) {
        Ok(files) => files,
        Err(e) => {
            if cli.json {
                eprintln!("Error: {e}");
            } else {
                reporter::print_no_files(&mut out);
            }
            process::exit(1);
        }
    };

    if !cli.json {
        reporter::print_file_count(&mut out, files.len());
    }

    let debug_timing = std::env::var("FORMAT_LINT_TIMING").is_ok();
    let mut results = Vec::new();
    for check in checks::ALL {
        if !cli.json {
            reporter::print_check_start(&mut out, check.name);
        }
        let start = std::time::Instant::now();
        let result = check.run_all(&config, &files);
        if debug_timing {
            eprintln!("  [{:>6.0?}] {}", start.elapsed(), result.name);
        }
        if !cli.json {
            reporter::print_result(&mut out, &result, config.preview_limit);
        }
        results.push(result);
    }

    let report = Report::new(files.len(), results, config.exit_code_cap);

    if cli.json {
        if let Err(e) = reporter::print_json(&mut out, &report) {
            eprintln!("Error: failed to write JSON report: {e}");
            process::exit(1);
        }
    } else {
        reporter::print_summary(&mut out, &report);
    }

    drop(out);
    process::exit(report.exit_code);
}
