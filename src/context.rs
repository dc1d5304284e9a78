//! Run context for check-run publishing.
//!
//! The repository identity and revision a check run is attached to. CI
//! exports these as `GITHUB_REPOSITORY` and `GITHUB_SHA`; the CLI reads them
//! through clap's `env` fallback and they are passed to the publisher as a
//! plain value rather than looked up from the environment at call time.

use crate::error::{AnnotateError, Result};

/// Repository and revision a check run targets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunContext {
    pub owner: String,
    pub repo: String,
    pub head_sha: String,
}

impl RunContext {
    /// Build a context from an `owner/repo` slug and a commit SHA.
    ///
    /// # Returns
    ///
    /// * `Ok(RunContext)` - Both values are well-formed
    /// * `Err(AnnotateError::UserError)` - Malformed slug or empty SHA
    pub fn new(repository: &str, head_sha: &str) -> Result<Self> {
        let (owner, repo) = repository
            .trim()
            .split_once('/')
            .filter(|(owner, repo)| !owner.is_empty() && !repo.is_empty() && !repo.contains('/'))
            .ok_or_else(|| {
                AnnotateError::UserError(format!(
                    "invalid repository '{}': expected OWNER/REPO.\n\
                     Fix: pass --repository or set GITHUB_REPOSITORY.",
                    repository
                ))
            })?;

        let head_sha = head_sha.trim();
        if head_sha.is_empty() {
            return Err(AnnotateError::UserError(
                "missing commit SHA.\nFix: pass --sha or set GITHUB_SHA.".to_string(),
            ));
        }

        Ok(Self {
            owner: owner.to_string(),
            repo: repo.to_string(),
            head_sha: head_sha.to_string(),
        })
    }
}
