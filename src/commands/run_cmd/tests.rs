//! Tests for the `run` pipeline (checker + scoping + verdict).
//!
//! The checker is replaced by a small `sh` script so no type-checker needs
//! to be installed.

#![cfg(unix)]

use super::{Targets, check};
use crate::annotate::Conclusion;
use crate::config::Config;
use crate::error::AnnotateError;
use crate::git::run_git;
use crate::test_support::{commit_file, create_test_repo};

/// Config whose checker prints `output` and exits 1, ignoring its arguments.
fn scripted_config(output: &str) -> Config {
    Config {
        checker_command: format!("sh -c {} sh", shell_quote(&format!("printf '%s\\n' {}; exit 1", output))),
        checker_flags: Vec::new(),
        ..Default::default()
    }
}

fn shell_quote(s: &str) -> String {
    format!("'{}'", s.replace('\'', "'\\''"))
}

/// Quote each diagnostic line for `printf '%s\n'`.
fn lines(items: &[&str]) -> String {
    items
        .iter()
        .map(|l| shell_quote(l))
        .collect::<Vec<_>>()
        .join(" ")
}

#[test]
fn test_paths_mode_annotates_every_parseable_line() {
    let repo = create_test_repo();
    let config = scripted_config(&lines(&[
        "src/app.py:12:5: error: Incompatible return value [return-value]",
        "src/app.py:3:1: note: See documentation",
        "lib/util.py:7:2: info: Revealed type is int [misc]",
    ]));

    let outcome = check(
        repo.path(),
        &config,
        &Targets::Paths(vec![".".to_string()]),
        0,
    )
    .unwrap();

    assert_eq!(outcome.annotations.len(), 2);
    assert_eq!(outcome.annotations[0].path, "src/app.py");
    assert_eq!(outcome.annotations[0].start_line, 12);
    assert_eq!(outcome.annotations[0].start_column, 5);
    assert!(outcome.annotations[0].is_failure());
    assert_eq!(outcome.annotations[1].path, "lib/util.py");
    assert!(!outcome.annotations[1].is_failure());
    assert_eq!(outcome.verdict.failure_count, 1);
    assert_eq!(outcome.verdict.conclusion, Conclusion::Failure);
}

#[test]
fn test_nonzero_checker_exit_still_succeeds() {
    let repo = create_test_repo();
    let config = scripted_config(&lines(&["a.py:1:1: error: Bad [misc]"]));

    let outcome = check(repo.path(), &config, &Targets::Paths(vec![".".to_string()]), 1).unwrap();

    assert_eq!(outcome.verdict.conclusion, Conclusion::Success);
}

#[test]
fn test_paths_are_passed_to_checker() {
    let repo = create_test_repo();
    let config = Config {
        checker_command: "sh -c 'for p in \"$@\"; do echo \"$p:1:1: error: Seen [misc]\"; done' sh"
            .to_string(),
        checker_flags: Vec::new(),
        ..Default::default()
    };

    let outcome = check(
        repo.path(),
        &config,
        &Targets::Paths(vec!["src".to_string(), "tests".to_string()]),
        10,
    )
    .unwrap();

    let paths: Vec<&str> = outcome.annotations.iter().map(|a| a.path.as_str()).collect();
    assert_eq!(paths, vec!["src", "tests"]);
}

#[test]
fn test_changed_since_scopes_annotations_to_changed_files() {
    let repo = create_test_repo();
    commit_file(repo.path(), "old.py", "x = 1\n");
    run_git(repo.path(), &["checkout", "-b", "feature"]).unwrap();
    commit_file(repo.path(), "new.py", "y = 2\n");
    commit_file(repo.path(), "docs.md", "# docs\n");

    let config = scripted_config(&lines(&[
        "old.py:1:1: error: Pre-existing problem [misc]",
        "new.py:1:1: error: New problem [misc]",
        "new.py:2:4: error: Another new problem [misc]",
    ]));

    let outcome = check(
        repo.path(),
        &config,
        &Targets::ChangedSince("main".to_string()),
        0,
    )
    .unwrap();

    let messages: Vec<&str> = outcome
        .annotations
        .iter()
        .map(|a| a.message.as_str())
        .collect();
    assert_eq!(messages, vec!["New problem", "Another new problem"]);
    assert_eq!(outcome.verdict.failure_count, 2);
}

#[test]
fn test_changed_since_checks_only_changed_files() {
    let repo = create_test_repo();
    run_git(repo.path(), &["checkout", "-b", "feature"]).unwrap();
    commit_file(repo.path(), "pkg/mod.py", "y = 2\n");
    commit_file(repo.path(), "notes.txt", "n\n");

    let config = Config {
        checker_command: "sh -c 'for p in \"$@\"; do echo \"$p:1:1: error: Seen [misc]\"; done' sh"
            .to_string(),
        checker_flags: Vec::new(),
        ..Default::default()
    };

    let outcome = check(
        repo.path(),
        &config,
        &Targets::ChangedSince("main".to_string()),
        0,
    )
    .unwrap();

    let paths: Vec<&str> = outcome.annotations.iter().map(|a| a.path.as_str()).collect();
    assert_eq!(paths, vec!["pkg/mod.py"]);
}

#[test]
fn test_changed_since_with_no_changes_skips_checker() {
    let repo = create_test_repo();
    let config = Config {
        checker_command: "definitely-not-a-real-checker-binary".to_string(),
        ..Default::default()
    };

    let outcome = check(
        repo.path(),
        &config,
        &Targets::ChangedSince("main".to_string()),
        0,
    )
    .unwrap();

    assert!(outcome.annotations.is_empty());
    assert_eq!(outcome.verdict.conclusion, Conclusion::Success);
}

#[test]
fn test_unknown_branch_is_git_error() {
    let repo = create_test_repo();
    let err = check(
        repo.path(),
        &Config::default(),
        &Targets::ChangedSince("no-such-branch".to_string()),
        0,
    )
    .unwrap_err();

    assert!(matches!(err, AnnotateError::GitError(_)));
}

#[test]
fn test_missing_checker_is_checker_error() {
    let repo = create_test_repo();
    let config = Config {
        checker_command: "definitely-not-a-real-checker-binary".to_string(),
        ..Default::default()
    };

    let err = check(repo.path(), &config, &Targets::Paths(vec![".".to_string()]), 0).unwrap_err();

    assert!(matches!(err, AnnotateError::CheckerError(_)));
}
