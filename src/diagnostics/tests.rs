//! Tests for diagnostic line parsing.

use super::{parse_line, read_lines_lossy};
use std::io::Cursor;

#[test]
fn test_parse_error_line() {
    let diag =
        parse_line("src/app.py:12:5: error: Incompatible return value [return-value]").unwrap();

    assert_eq!(diag.file, "src/app.py");
    assert_eq!(diag.line, 12);
    assert_eq!(diag.column, 5);
    assert_eq!(diag.severity_token, "error");
    assert_eq!(diag.message, "Incompatible return value");
    assert_eq!(diag.error_code, "return-value");
}

#[test]
fn test_message_may_contain_colons() {
    let diag = parse_line(
        "pkg/mod.py:3:14: error: Argument 1 to \"f\" has incompatible type \"str\"; expected \"int\": see docs [arg-type]",
    )
    .unwrap();

    assert_eq!(diag.file, "pkg/mod.py");
    assert_eq!(
        diag.message,
        "Argument 1 to \"f\" has incompatible type \"str\"; expected \"int\": see docs"
    );
    assert_eq!(diag.error_code, "arg-type");
}

#[test]
fn test_message_may_contain_brackets() {
    let diag =
        parse_line("a.py:1:1: error: Name \"x\" is not defined [in list[int]] [name-defined]")
            .unwrap();

    assert_eq!(diag.message, "Name \"x\" is not defined [in list[int]]");
    assert_eq!(diag.error_code, "name-defined");
}

#[test]
fn test_other_severity_tokens_are_kept_verbatim() {
    let diag = parse_line("a.py:2:7: info: Revealed type [misc]").unwrap();
    assert_eq!(diag.severity_token, "info");

    let diag = parse_line("a.py:2:7: warning: Unused ignore [unused-ignore]").unwrap();
    assert_eq!(diag.severity_token, "warning");
}

#[test]
fn test_missing_code_suffix_is_rejected() {
    assert!(parse_line("src/app.py:3:1: note: See documentation").is_none());
}

#[test]
fn test_uppercase_code_is_rejected() {
    assert!(parse_line("a.py:1:1: error: Bad thing [Return-Value]").is_none());
}

#[test]
fn test_non_numeric_position_is_rejected() {
    assert!(parse_line("a.py:x:1: error: Bad thing [misc]").is_none());
    assert!(parse_line("a.py:1:y: error: Bad thing [misc]").is_none());
}

#[test]
fn test_missing_column_is_rejected() {
    assert!(parse_line("a.py:1: error: Bad thing [misc]").is_none());
}

#[test]
fn test_empty_severity_is_rejected() {
    assert!(parse_line("a.py:1:1: : Bad thing [misc]").is_none());
}

#[test]
fn test_zero_position_is_rejected() {
    assert!(parse_line("a.py:0:1: error: Bad thing [misc]").is_none());
    assert!(parse_line("a.py:1:0: error: Bad thing [misc]").is_none());
}

#[test]
fn test_overflowing_position_is_rejected() {
    assert!(parse_line("a.py:99999999999999999999999:1: error: Bad thing [misc]").is_none());
}

#[test]
fn test_blank_and_summary_lines_are_rejected() {
    assert!(parse_line("").is_none());
    assert!(parse_line("Found 3 errors in 1 file (checked 2 source files)").is_none());
    assert!(parse_line("Success: no issues found in 1 source file").is_none());
}

#[test]
fn test_trailing_text_after_code_is_rejected() {
    assert!(parse_line("a.py:1:1: error: Bad thing [misc] extra").is_none());
}

// =========================================================================
// Line reading
// =========================================================================

fn collect_lines(input: &[u8]) -> (Vec<String>, usize) {
    let mut seen = Vec::new();
    let count = read_lines_lossy(Cursor::new(input), |line| seen.push(line.to_string())).unwrap();
    (seen, count)
}

#[test]
fn test_read_lines_strips_terminators() {
    let (seen, count) = collect_lines(b"one\ntwo\r\nthree");
    assert_eq!(seen, vec!["one", "two", "three"]);
    assert_eq!(count, 3);
}

#[test]
fn test_read_lines_replaces_invalid_utf8() {
    let (seen, count) = collect_lines(b"caf\xe9.py\n\xff\na.py:2:1: error: Bad [misc]\n");
    assert_eq!(count, 3);
    assert_eq!(seen[0], "caf\u{FFFD}.py");
    assert_eq!(seen[1], "\u{FFFD}");
    assert_eq!(seen[2], "a.py:2:1: error: Bad [misc]");
}

#[test]
fn test_read_lines_keeps_blank_lines() {
    let (seen, _) = collect_lines(b"\n\r\nx\n");
    assert_eq!(seen, vec!["", "", "x"]);
}

#[test]
fn test_read_lines_empty_input() {
    let (seen, count) = collect_lines(b"");
    assert!(seen.is_empty());
    assert_eq!(count, 0);
}
