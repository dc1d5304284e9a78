//! Severity classification.

use super::types::AnnotationLevel;

/// Map a checker severity word to an annotation level.
///
/// Only `info` is downgraded to a notice. Every other token, including empty
/// and unrecognized ones, is a failure.
pub fn classify(severity_token: &str) -> AnnotationLevel {
    match severity_token {
        "info" => AnnotationLevel::Notice,
        _ => AnnotationLevel::Failure,
    }
}
