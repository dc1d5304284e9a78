//! Annotation record and level.

use crate::diagnostics::Diagnostic;
use serde::Serialize;

/// Severity of a published annotation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationLevel {
    Notice,
    Failure,
}

/// A single-point annotation, serialized in the check-run API's field names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Annotation {
    pub path: String,
    pub start_line: usize,
    pub end_line: usize,
    pub start_column: usize,
    pub end_column: usize,
    #[serde(rename = "annotation_level")]
    pub level: AnnotationLevel,
    pub message: String,
}

impl Annotation {
    /// Build an annotation anchored at the diagnostic's line and column.
    pub fn from_diagnostic(diagnostic: Diagnostic, level: AnnotationLevel) -> Self {
        Self {
            path: diagnostic.file,
            start_line: diagnostic.line,
            end_line: diagnostic.line,
            start_column: diagnostic.column,
            end_column: diagnostic.column,
            level,
            message: diagnostic.message,
        }
    }

    pub fn is_failure(&self) -> bool {
        self.level == AnnotationLevel::Failure
    }
}
