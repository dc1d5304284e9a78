//! Folding checker output into an ordered annotation list.

use crate::diagnostics::parse_line;

use super::scope::{ScopeSet, in_scope};
use super::severity::classify;
use super::types::Annotation;

/// Accumulates annotations from checker lines in arrival order.
///
/// Lines are consumed one at a time. Unparseable lines are logged and
/// counted; out-of-scope diagnostics are dropped. Duplicates are kept.
#[derive(Debug, Default)]
pub struct AnnotationAccumulator {
    scope: Option<ScopeSet>,
    annotations: Vec<Annotation>,
    unparsed: usize,
    out_of_scope: usize,
}

impl AnnotationAccumulator {
    /// Create an accumulator. `None` accepts diagnostics for every file.
    pub fn new(scope: Option<ScopeSet>) -> Self {
        Self {
            scope,
            ..Default::default()
        }
    }

    /// Consume one raw checker line.
    pub fn push_line(&mut self, line: &str) {
        let Some(diagnostic) = parse_line(line) else {
            tracing::warn!(line, "Unable to parse line");
            self.unparsed += 1;
            return;
        };

        if !in_scope(&diagnostic, self.scope.as_ref()) {
            tracing::debug!(
                file = %diagnostic.file,
                code = %diagnostic.error_code,
                "skipping diagnostic outside changed files"
            );
            self.out_of_scope += 1;
            return;
        }

        let level = classify(&diagnostic.severity_token);
        self.annotations
            .push(Annotation::from_diagnostic(diagnostic, level));
    }

    /// Fold every line of an iterator into a fresh accumulator.
    pub fn from_lines<I, S>(scope: Option<ScopeSet>, lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        lines.into_iter().fold(Self::new(scope), |mut acc, line| {
            acc.push_line(line.as_ref());
            acc
        })
    }

    /// Annotations collected so far, in arrival order.
    #[cfg(test)]
    pub fn annotations(&self) -> &[Annotation] {
        &self.annotations
    }

    /// Number of lines that did not match the diagnostic grammar.
    pub fn unparsed_count(&self) -> usize {
        self.unparsed
    }

    /// Number of diagnostics dropped by the scope filter.
    pub fn out_of_scope_count(&self) -> usize {
        self.out_of_scope
    }

    /// Hand the full annotation list to the caller.
    pub fn finish(self) -> Vec<Annotation> {
        self.annotations
    }
}
