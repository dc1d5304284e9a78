//! Command implementations for mypy-annotate.
//!
//! This module provides the dispatcher that routes CLI commands to their
//! implementations.

mod parse;
mod run_cmd;

use crate::annotate::RunVerdict;
use crate::cli::Command;
use crate::error::{AnnotateError, Result};

/// Dispatch a command to its implementation.
pub fn dispatch(command: Command) -> Result<()> {
    match command {
        Command::Run(args) => run_cmd::cmd_run(args),
        Command::Parse(args) => parse::cmd_parse(args),
    }
}

/// Map a failing verdict to the threshold error.
fn check_threshold(verdict: &RunVerdict, label: &str) -> Result<()> {
    if verdict.is_failure() {
        Err(AnnotateError::ThresholdExceeded {
            failures: verdict.failure_count,
            label: label.to_string(),
        })
    } else {
        Ok(())
    }
}
