//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Settings for a mypy-annotate run.
///
/// Required run inputs (`--max-errors`, the token, repository identity) come
/// from the command line; this struct holds the tunables around them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Check-run name and output title (default: "Mypy").
    #[serde(default = "default_check_name")]
    pub check_name: String,

    /// Program and leading arguments used to run the checker (shell-words parsed; no shell).
    #[serde(default = "default_checker_command")]
    pub checker_command: String,

    /// Output-format flags passed before the paths.
    #[serde(default = "default_checker_flags")]
    pub checker_flags: Vec<String>,

    /// Extension (no leading dot) of files kept from `git diff --name-only`.
    #[serde(default = "default_source_extension")]
    pub source_extension: String,

    /// Annotations per create/update request (1..=50).
    #[serde(default = "default_batch_size")]
    pub batch_size: usize,

    /// Base URL of the check-run API.
    #[serde(default = "default_api_url")]
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            check_name: default_check_name(),
            checker_command: default_checker_command(),
            checker_flags: default_checker_flags(),
            source_extension: default_source_extension(),
            batch_size: default_batch_size(),
            api_url: default_api_url(),
        }
    }
}
