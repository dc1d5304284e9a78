//! CLI argument parsing for mypy-annotate.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// mypy-annotate: run mypy in CI and publish its findings as check-run annotations.
///
/// Diagnostics are parsed from the checker's output, optionally limited to files
/// changed against a reference branch, and published against a commit. The run
/// fails when the number of error-level findings exceeds `--max-errors`.
#[derive(Parser, Debug)]
#[command(name = "mypy-annotate")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for mypy-annotate.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the checker and publish a check run.
    ///
    /// Repository identity and credentials fall back to the GITHUB_REPOSITORY,
    /// GITHUB_SHA and GITHUB_TOKEN environment variables.
    Run(RunArgs),

    /// Convert checker output into annotations without publishing.
    ///
    /// Reads checker lines from a file or stdin and prints the verdict and
    /// annotations as JSON.
    Parse(ParseArgs),
}

/// Arguments for the `run` command.
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Maximum number of error-level findings before the run fails.
    #[arg(long)]
    pub max_errors: usize,

    /// Token used to create and update the check run.
    #[arg(
        long,
        env = "GITHUB_TOKEN",
        hide_env_values = true,
        required_unless_present = "dry_run"
    )]
    pub github_token: Option<String>,

    /// Only check files changed against this branch, and only annotate those files.
    #[arg(long)]
    pub diff_against_branch: Option<String>,

    /// Space-separated files or directories to check (ignored with --diff-against-branch).
    #[arg(long, default_value = ".")]
    pub paths: String,

    /// Repository the check run belongs to, as OWNER/REPO.
    #[arg(long, env = "GITHUB_REPOSITORY", required_unless_present = "dry_run")]
    pub repository: Option<String>,

    /// Commit the check run is attached to.
    #[arg(long, env = "GITHUB_SHA", required_unless_present = "dry_run")]
    pub sha: Option<String>,

    /// Optional YAML settings file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Run the checker and compute the verdict, but do not publish.
    #[arg(long)]
    pub dry_run: bool,
}

impl RunArgs {
    /// The reference branch, if change-scoping was requested.
    ///
    /// An empty value (as CI passes for an unset input) means no scoping.
    pub fn diff_branch(&self) -> Option<&str> {
        self.diff_against_branch
            .as_deref()
            .map(str::trim)
            .filter(|branch| !branch.is_empty())
    }

    /// Paths to check when not change-scoped; defaults to the current directory.
    pub fn path_list(&self) -> Vec<String> {
        let paths: Vec<String> = self.paths.split_whitespace().map(String::from).collect();
        if paths.is_empty() {
            vec![".".to_string()]
        } else {
            paths
        }
    }
}

/// Arguments for the `parse` command.
#[derive(Parser, Debug)]
pub struct ParseArgs {
    /// File containing checker output. Reads stdin when omitted.
    #[arg(long)]
    pub input: Option<PathBuf>,

    /// Only annotate this file (exact path match). Repeat for several files.
    #[arg(long, value_name = "PATH")]
    pub only: Vec<String>,

    /// Maximum number of error-level findings before the verdict fails.
    #[arg(long, default_value_t = 0)]
    pub max_errors: usize,

    /// Optional YAML settings file (for the check name used in messages).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
