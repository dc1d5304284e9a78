//! Git command runner for mypy-annotate.
//!
//! Provides a wrapper around git commands with captured stdout/stderr and
//! structured error handling, plus the change-detection query used to build
//! the scope set for diff-scoped runs.

use crate::error::{AnnotateError, Result};
use std::path::Path;
use std::process::{Command, Output};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }

    /// Returns stdout lines as a vector.
    pub fn lines(&self) -> Vec<&str> {
        if self.stdout.is_empty() {
            Vec::new()
        } else {
            self.stdout.lines().collect()
        }
    }
}

/// Run a git command with the specified working directory.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the command in
/// * `args` - The git command arguments (without "git" prefix)
///
/// # Returns
///
/// * `Ok(GitOutput)` - On successful execution (exit code 0)
/// * `Err(AnnotateError::GitError)` - If git could not be run or exited non-zero
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let cwd = cwd.as_ref();

    let output = Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            AnnotateError::GitError(format!(
                "failed to execute git {}: {}",
                args.first().unwrap_or(&""),
                e
            ))
        })?;

    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout.clone()
        } else {
            git_output.stderr.clone()
        };

        Err(AnnotateError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

/// List files changed relative to a reference branch.
///
/// Runs `git diff {branch} --name-only` and keeps paths ending in
/// `.{extension}`. Paths are returned exactly as git prints them.
///
/// Files deleted since `branch` are listed too. Passed to the checker they
/// only produce a "can't read file" message on its stderr and no
/// diagnostics, so a diff made up of deletions reports success.
///
/// # Returns
///
/// * `Ok(Vec<String>)` - Changed source files, in git's output order
/// * `Err(AnnotateError::GitError)` - Git command failed (e.g. unknown branch)
pub fn changed_files<P: AsRef<Path>>(cwd: P, branch: &str, extension: &str) -> Result<Vec<String>> {
    let output = run_git(&cwd, &["diff", branch, "--name-only"])?;
    let suffix = format!(".{}", extension);

    Ok(output
        .lines()
        .into_iter()
        .filter(|path| path.ends_with(&suffix))
        .map(str::to_string)
        .collect())
}
