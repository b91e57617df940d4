use std::fs;
use std::path::Path;

use format_lint::checks::{
    include_guards, indentation, line_length, namespace_comments, tabs, trailing_whitespace,
    CheckFn,
};
use format_lint::config::LinterConfig;
use format_lint::source::SourceFile;
use format_lint::walker;

fn write_file(path: &Path, content: impl AsRef<[u8]>) {
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, content).unwrap();
}

fn run_on(check: CheckFn, root: &Path, rel: &str, content: &str) -> Vec<String> {
    let path = root.join(rel);
    write_file(&path, content);
    let config = LinterConfig::from_root(root);
    let file = SourceFile::new(path, root);
    check(&config, &file).iter().map(|i| i.to_string()).collect()
}

fn namespace_file(body_lines: usize, closing: &str) -> String {
    let mut text = String::from("namespace foo {\n");
    for n in 0..body_lines {
        text.push_str(&format!("int value_{n} = {n};\n"));
    }
    text.push_str(closing);
    text.push('\n');
    text
}

#[test]
fn discovery_is_sorted_filtered_and_skips_missing_roots() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_file(&root.join("src/b.cpp"), "");
    write_file(&root.join("src/a.cc"), "");
    write_file(&root.join("src/nested/deep.cxx"), "");
    write_file(&root.join("include/core.hpp"), "");
    write_file(&root.join("include/legacy.h"), "");
    write_file(&root.join("src/notes.txt"), "");
    write_file(&root.join("src/script.py"), "");
    write_file(&root.join("other/ignored.cpp"), "");

    let config = LinterConfig::from_root(root);
    let files: Vec<String> = walker::collect_source_files(&config)
        .iter()
        .map(|f| f.rel_path.display().to_string())
        .collect();

    assert_eq!(
        files,
        vec![
            "include/core.hpp",
            "include/legacy.h",
            "src/a.cc",
            "src/b.cpp",
            "src/nested/deep.cxx",
        ]
    );
}

#[test]
fn discovery_orders_by_relative_path_string() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_file(&root.join("src/core.cpp"), "");
    write_file(&root.join("src/core/a.cpp"), "");
    write_file(&root.join("src/core-impl.cpp"), "");

    let config = LinterConfig::from_root(root);
    let files: Vec<String> = walker::collect_source_files(&config)
        .iter()
        .map(|f| f.rel_path.display().to_string())
        .collect();

    assert_eq!(files, vec!["src/core-impl.cpp", "src/core.cpp", "src/core/a.cpp"]);
}

#[test]
fn discovery_fails_when_nothing_matches() {
    let temp = tempfile::tempdir().unwrap();
    write_file(&temp.path().join("src/readme.md"), "# nothing here\n");

    let config = LinterConfig::from_root(temp.path());
    assert!(walker::collect_source_files(&config).is_empty());
    let err = walker::discover(&config).unwrap_err();
    assert!(err.to_string().contains("No C++ files found"));
}

#[test]
fn line_length_clean_file_has_no_issues() {
    let temp = tempfile::tempdir().unwrap();
    let content = format!("{}\n{}\n", "a".repeat(100), "b".repeat(40));
    let issues = run_on(line_length::check, temp.path(), "src/ok.cpp", &content);
    assert!(issues.is_empty());
}

#[test]
fn line_length_reports_single_long_line() {
    let temp = tempfile::tempdir().unwrap();
    let content = format!("int a;\nint b;\n{}\nint c;\n", "c".repeat(101));
    let issues = run_on(line_length::check, temp.path(), "src/long.cpp", &content);
    assert_eq!(issues, vec!["src/long.cpp:3: Line too long (101 > 100)"]);
}

#[test]
fn carriage_returns_end_lines_for_every_line_check() {
    let temp = tempfile::tempdir().unwrap();
    let content = format!("int a;\r\r\n{}\r", "x".repeat(100));

    let long = run_on(line_length::check, temp.path(), "src/cr.cpp", &content);
    let trailing = run_on(trailing_whitespace::check, temp.path(), "src/cr.cpp", &content);

    assert!(long.is_empty());
    assert!(trailing.is_empty());
}

#[test]
fn lone_carriage_return_line_breaks_keep_line_numbers() {
    let temp = tempfile::tempdir().unwrap();
    let issues = run_on(
        trailing_whitespace::check,
        temp.path(),
        "src/mac.cpp",
        "int a;\rint b; \rint c;\r",
    );
    assert_eq!(issues, vec!["src/mac.cpp:2: Trailing whitespace"]);
}

#[test]
fn unreadable_file_yields_one_read_issue() {
    let temp = tempfile::tempdir().unwrap();
    let path = temp.path().join("src/binary.cpp");
    write_file(&path, [0x66u8, 0x6f, 0xff, 0xfe, 0x0a, 0x20, 0x20, 0x0a]);

    let config = LinterConfig::from_root(temp.path());
    let file = SourceFile::new(path, temp.path());
    let check_fns: [CheckFn; 5] = [
        line_length::check,
        trailing_whitespace::check,
        tabs::check,
        namespace_comments::check,
        indentation::check,
    ];
    for check in check_fns {
        let issues = check(&config, &file);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].line, None);
        assert!(issues[0].message.starts_with("Error reading file - "));
    }
}

#[test]
fn trailing_whitespace_flags_only_dirty_lines() {
    let temp = tempfile::tempdir().unwrap();
    let issues = run_on(
        trailing_whitespace::check,
        temp.path(),
        "src/ws.cpp",
        "int a;\nint b; \nint c;\t\t\nint d;\r\n",
    );
    assert_eq!(
        issues,
        vec!["src/ws.cpp:2: Trailing whitespace", "src/ws.cpp:3: Trailing whitespace"]
    );
}

#[test]
fn tabs_report_once_per_file() {
    let temp = tempfile::tempdir().unwrap();
    let issues = run_on(tabs::check, temp.path(), "src/tabs.cpp", "\tint a;\n\tint b;\t\n");
    assert_eq!(issues, vec!["src/tabs.cpp: Contains tab characters"]);

    let clean = run_on(tabs::check, temp.path(), "src/spaces.cpp", "    int a;\n");
    assert!(clean.is_empty());
}

#[test]
fn header_with_pragma_once_passes_guard_check() {
    let temp = tempfile::tempdir().unwrap();
    let issues = run_on(
        include_guards::check,
        temp.path(),
        "include/core.hpp",
        "#pragma once\n\nint answer();\n",
    );
    assert!(issues.is_empty());
}

#[test]
fn header_without_guards_gets_one_issue() {
    let temp = tempfile::tempdir().unwrap();
    let issues = run_on(include_guards::check, temp.path(), "include/bare.h", "int answer();\n");
    assert_eq!(issues, vec!["include/bare.h: Missing or incomplete include guards"]);
}

#[test]
fn source_file_without_guards_is_not_checked() {
    let temp = tempfile::tempdir().unwrap();
    let issues = run_on(include_guards::check, temp.path(), "src/core.cpp", "int answer();\n");
    assert!(issues.is_empty());
}

#[test]
fn long_namespace_needs_closing_comment() {
    let temp = tempfile::tempdir().unwrap();
    let bare = run_on(
        namespace_comments::check,
        temp.path(),
        "src/bare.cpp",
        &namespace_file(13, "}"),
    );
    assert_eq!(bare, vec!["src/bare.cpp:15: Missing namespace closing comment"]);

    let commented = run_on(
        namespace_comments::check,
        temp.path(),
        "src/commented.cpp",
        &namespace_file(13, "} // namespace foo"),
    );
    assert!(commented.is_empty());
}

#[test]
fn short_namespace_needs_no_comment() {
    let temp = tempfile::tempdir().unwrap();
    let issues = run_on(
        namespace_comments::check,
        temp.path(),
        "src/short.cpp",
        &namespace_file(3, "}"),
    );
    assert!(issues.is_empty());
}

#[test]
fn indentation_reports_first_plain_misaligned_line() {
    let temp = tempfile::tempdir().unwrap();
    let issues = run_on(
        indentation::check,
        temp.path(),
        "src/indent.cpp",
        "int f() {\n  return 0;\n  label\n   other\n}\n",
    );
    assert_eq!(
        issues,
        vec!["src/indent.cpp:3: Inconsistent indentation (not multiple of 4)"]
    );
}

#[test]
fn run_all_checks_covers_every_check_in_order() {
    let temp = tempfile::tempdir().unwrap();
    let root = temp.path();
    write_file(&root.join("include/api.hpp"), "int api(); \n");
    write_file(&root.join("src/api.cpp"), "int api() {\n\treturn 1;\n}\n");

    let config = LinterConfig::from_root(root);
    let files = walker::discover(&config).unwrap();
    let report = format_lint::run_all_checks(&config, &files);

    let names: Vec<&str> = report.checks.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(
        names,
        vec![
            "Line length",
            "Trailing whitespace",
            "Tab characters",
            "Include guards",
            "Namespace comments",
            "Indentation",
        ]
    );
    assert_eq!(report.file_count, 2);
    // trailing whitespace in the header, one tab file, one unguarded header
    assert_eq!(report.total_issues, 3);
    assert_eq!(report.exit_code, 3);
}
