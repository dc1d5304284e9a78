//! Pass/fail aggregation.

use serde::Serialize;

use super::types::Annotation;

/// Overall conclusion of a run, in the check-run API's spelling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Conclusion {
    Success,
    Failure,
}

impl std::fmt::Display for Conclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Conclusion::Success => write!(f, "success"),
            Conclusion::Failure => write!(f, "failure"),
        }
    }
}

/// The verdict computed once all diagnostics are consumed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RunVerdict {
    pub conclusion: Conclusion,
    pub total_annotation_count: usize,
    pub failure_count: usize,
}

impl RunVerdict {
    pub fn is_failure(&self) -> bool {
        self.conclusion == Conclusion::Failure
    }

    /// Summary line published with the check run.
    pub fn summary(&self, label: &str) -> String {
        format!(
            "There are {} {} warnings",
            self.total_annotation_count, label
        )
    }
}

/// Count failure annotations and compare against `max_errors`.
///
/// The run fails only when the failure count is strictly greater than
/// `max_errors`. Notices never count.
pub fn aggregate(annotations: &[Annotation], max_errors: usize) -> RunVerdict {
    let failure_count = annotations.iter().filter(|a| a.is_failure()).count();

    let conclusion = if failure_count > max_errors {
        Conclusion::Failure
    } else {
        Conclusion::Success
    };

    RunVerdict {
        conclusion,
        total_annotation_count: annotations.len(),
        failure_count,
    }
}
