//! Exit code constants for the mypy-annotate CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, invalid config, missing CI context)
//! - 2: Threshold exceeded (more failure annotations than `--max-errors`)
//! - 3: Git operation failure (change detection)
//! - 4: Checker failure (could not run or read the type-checker)
//! - 5: Report failure (check-run create/update rejected)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments, invalid config, or missing CI context.
pub const USER_ERROR: i32 = 1;

/// The run produced more failure-level annotations than allowed.
pub const THRESHOLD_EXCEEDED: i32 = 2;

/// Git operation failure: `git diff` against the reference branch failed.
pub const GIT_FAILURE: i32 = 3;

/// The type-checker could not be executed or its output could not be read.
pub const CHECKER_FAILURE: i32 = 4;

/// Publishing to the check-run API failed.
pub const REPORT_FAILURE: i32 = 5;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            SUCCESS,
            USER_ERROR,
            THRESHOLD_EXCEEDED,
            GIT_FAILURE,
            CHECKER_FAILURE,
            REPORT_FAILURE,
        ];
        for (i, &a) in codes.iter().enumerate() {
            for (j, &b) in codes.iter().enumerate() {
                if i != j {
                    assert_ne!(a, b, "Exit codes must be distinct");
                }
            }
        }
    }

    #[test]
    fn success_is_zero() {
        assert_eq!(SUCCESS, 0);
    }
}
