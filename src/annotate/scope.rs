//! Change-scope filtering.
//!
//! Paths are compared byte-for-byte. The changed-file list comes from
//! `git diff --name-only` while diagnostic paths come from the checker, so a
//! checker invoked with `./src/a.py` will not match `src/a.py`. Both producers
//! print repo-relative paths when run from the repository root.

use crate::diagnostics::Diagnostic;
use std::collections::HashSet;

/// The set of file paths considered changed for this run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScopeSet {
    files: HashSet<String>,
}

impl ScopeSet {
    pub fn new<I, S>(files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            files: files.into_iter().map(Into::into).collect(),
        }
    }

    /// Exact membership test; no normalization, prefix, or glob matching.
    pub fn contains(&self, path: &str) -> bool {
        self.files.contains(path)
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }
}

/// Whether a diagnostic should be annotated.
///
/// With no scope set every diagnostic is in scope.
pub fn in_scope(diagnostic: &Diagnostic, scope: Option<&ScopeSet>) -> bool {
    match scope {
        None => true,
        Some(set) => set.contains(&diagnostic.file),
    }
}
