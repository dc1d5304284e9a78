//! Error types for the mypy-annotate CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for mypy-annotate operations.
///
/// Each variant maps to a specific exit code. Unparseable checker lines are
/// not errors and never reach this type.
#[derive(Error, Debug)]
pub enum AnnotateError {
    /// User provided invalid arguments or configuration.
    #[error("{0}")]
    UserError(String),

    /// Change detection (`git diff`) failed.
    #[error("Git operation failed: {0}")]
    GitError(String),

    /// The type-checker could not be run or its output could not be read.
    #[error("Checker failed: {0}")]
    CheckerError(String),

    /// A check-run create or update call failed.
    #[error("Publishing check run failed: {0}")]
    ReportError(String),

    /// More failure-level annotations than the configured maximum.
    #[error("There are {failures} {label} errors")]
    ThresholdExceeded { failures: usize, label: String },
}

impl AnnotateError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            AnnotateError::UserError(_) => exit_codes::USER_ERROR,
            AnnotateError::GitError(_) => exit_codes::GIT_FAILURE,
            AnnotateError::CheckerError(_) => exit_codes::CHECKER_FAILURE,
            AnnotateError::ReportError(_) => exit_codes::REPORT_FAILURE,
            AnnotateError::ThresholdExceeded { .. } => exit_codes::THRESHOLD_EXCEEDED,
        }
    }
}

/// Result type alias for mypy-annotate operations.
pub type Result<T> = std::result::Result<T, AnnotateError>;
