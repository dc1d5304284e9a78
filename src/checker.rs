//! Type-checker process runner.
//!
//! Spawns the checker with stdout piped and hands each output line to a
//! callback as it arrives. A non-zero exit is the checker's normal way of
//! saying it found diagnostics and is not treated as an error.

use crate::diagnostics::read_lines_lossy;
use crate::error::{AnnotateError, Result};
use std::io::BufReader;
use std::path::Path;
use std::process::{Command, Stdio};

/// How the checker process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CheckerExit {
    /// Exit code, or `None` if the process was terminated by a signal.
    pub code: Option<i32>,
    /// Number of stdout lines delivered to the callback.
    pub lines: usize,
}

/// Run the checker and stream its stdout, one line at a time, into `on_line`.
///
/// # Arguments
///
/// * `cwd` - The working directory to run the checker in
/// * `argv` - Program followed by its leading arguments (see `Config::checker_argv`)
/// * `flags` - Output-format flags appended after `argv`
/// * `paths` - Files or directories to check, appended last
/// * `on_line` - Called for every stdout line, in order, without the line terminator.
///   Invalid UTF-8 is replaced rather than treated as a read failure.
///
/// # Returns
///
/// * `Ok(CheckerExit)` - The process ran to completion, whatever its exit code
/// * `Err(AnnotateError::CheckerError)` - Spawn, I/O, or wait failure
pub fn run_checker<P, F>(
    cwd: P,
    argv: &[String],
    flags: &[String],
    paths: &[String],
    on_line: F,
) -> Result<CheckerExit>
where
    P: AsRef<Path>,
    F: FnMut(&str),
{
    let (program, leading) = argv
        .split_first()
        .ok_or_else(|| AnnotateError::UserError("checker command is empty".to_string()))?;

    tracing::info!(program = %program, paths = ?paths, "running checker");

    let mut child = Command::new(program)
        .args(leading)
        .args(flags)
        .args(paths)
        .current_dir(cwd.as_ref())
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::inherit())
        .spawn()
        .map_err(|e| {
            AnnotateError::CheckerError(format!(
                "failed to execute {}: {}\nFix: ensure the checker is installed and in PATH.",
                program, e
            ))
        })?;

    let stdout = child.stdout.take().ok_or_else(|| {
        AnnotateError::CheckerError(format!("failed to capture stdout of {}", program))
    })?;

    let lines = match read_lines_lossy(BufReader::new(stdout), on_line) {
        Ok(lines) => lines,
        Err(e) => {
            let _ = child.kill();
            let _ = child.wait();
            return Err(AnnotateError::CheckerError(format!(
                "failed to read output of {}: {}",
                program, e
            )));
        }
    };

    let status = child.wait().map_err(|e| {
        AnnotateError::CheckerError(format!("failed to wait for {}: {}", program, e))
    })?;

    Ok(CheckerExit {
        code: status.code(),
        lines,
    })
}
