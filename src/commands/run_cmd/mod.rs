//! Implementation of the `mypy-annotate run` command.
//!
//! # Steps
//!
//! 1. Load settings and resolve what to check (explicit paths, or files
//!    changed against `--diff-against-branch`, which also become the scope set)
//! 2. Run the checker, folding each output line into the annotation list
//! 3. Aggregate the verdict against `--max-errors`
//! 4. Publish the verdict and annotations as a check run (skipped with `--dry-run`)
//! 5. Exit non-zero if the threshold was exceeded or publishing failed

#[cfg(test)]
mod tests;

use crate::annotate::{Annotation, AnnotationAccumulator, RunVerdict, ScopeSet, aggregate};
use crate::checker::run_checker;
use crate::cli::RunArgs;
use crate::config::Config;
use crate::context::RunContext;
use crate::error::{AnnotateError, Result};
use crate::git::changed_files;
use crate::report::{BatchPublisher, GitHubChecks, PublishSettings};
use chrono::Utc;
use std::env;
use std::path::Path;

use super::check_threshold;

/// What to hand to the checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Targets {
    /// Check these paths and annotate every diagnostic.
    Paths(Vec<String>),
    /// Check files changed against the branch and annotate only those.
    ChangedSince(String),
}

impl Targets {
    fn from_args(args: &RunArgs) -> Self {
        match args.diff_branch() {
            Some(branch) => Targets::ChangedSince(branch.to_string()),
            None => Targets::Paths(args.path_list()),
        }
    }
}

/// Annotations and verdict of a finished checker run.
#[derive(Debug, Clone)]
pub(crate) struct CheckOutcome {
    pub verdict: RunVerdict,
    pub annotations: Vec<Annotation>,
}

/// Execute the `mypy-annotate run` command.
///
/// # Exit Codes
///
/// - 0: Failure count within `--max-errors` and the check run was published
/// - 1: User error (bad config, missing repository/sha/token)
/// - 2: Failure count exceeded `--max-errors`
/// - 3: Git error while listing changed files
/// - 4: The checker could not be run
/// - 5: Creating or updating the check run failed
pub fn cmd_run(args: RunArgs) -> Result<()> {
    let config = Config::load_or_default(args.config.as_ref())?;
    let cwd = env::current_dir().map_err(|e| {
        AnnotateError::UserError(format!("failed to get current working directory: {}", e))
    })?;

    // Resolve the publish target up front so a missing repository or token
    // fails before the checker runs.
    let publish_target = if args.dry_run {
        None
    } else {
        Some(resolve_publish_target(&args, &config)?)
    };

    let outcome = check(&cwd, &config, &Targets::from_args(&args), args.max_errors)?;
    let label = config.label();

    if outcome.verdict.is_failure() {
        tracing::error!(
            "There are {} {} errors",
            outcome.verdict.failure_count,
            label
        );
    }

    match publish_target {
        None => {
            println!(
                "{}: {} ({} failures, max {})",
                outcome.verdict.conclusion,
                outcome.verdict.summary(&label),
                outcome.verdict.failure_count,
                args.max_errors
            );
        }
        Some((ctx, api)) => {
            let mut publisher = BatchPublisher::new(api, publish_settings(&config));
            let report =
                publisher.publish(&ctx, &outcome.verdict, &outcome.annotations, Utc::now())?;
            tracing::info!(
                id = %report.check_run_id,
                requests = report.requests,
                "published check run"
            );
        }
    }

    check_threshold(&outcome.verdict, &label)
}

fn resolve_publish_target(args: &RunArgs, config: &Config) -> Result<(RunContext, GitHubChecks)> {
    let repository = args.repository.as_deref().ok_or_else(|| {
        AnnotateError::UserError(
            "missing repository.\nFix: pass --repository or set GITHUB_REPOSITORY.".to_string(),
        )
    })?;
    let sha = args.sha.as_deref().unwrap_or_default();
    let ctx = RunContext::new(repository, sha)?;

    let token = args
        .github_token
        .as_deref()
        .filter(|token| !token.trim().is_empty())
        .ok_or_else(|| {
            AnnotateError::UserError(
                "missing token.\nFix: pass --github-token or set GITHUB_TOKEN.".to_string(),
            )
        })?;

    let api = GitHubChecks::new(&config.api_url, token)?;
    Ok((ctx, api))
}

fn publish_settings(config: &Config) -> PublishSettings {
    PublishSettings {
        name: config.check_name.clone(),
        label: config.label(),
        batch_size: config.batch_size,
    }
}

/// Run the checker over `targets` in `cwd` and aggregate the result.
pub(crate) fn check(
    cwd: &Path,
    config: &Config,
    targets: &Targets,
    max_errors: usize,
) -> Result<CheckOutcome> {
    let (paths, scope) = match targets {
        Targets::Paths(paths) => (paths.clone(), None),
        Targets::ChangedSince(branch) => {
            let files = changed_files(cwd, branch, &config.source_extension)?;
            tracing::info!(branch = %branch, files = files.len(), "changed files");
            let scope = ScopeSet::new(files.iter().cloned());
            (files, Some(scope))
        }
    };

    let mut accumulator = AnnotationAccumulator::new(scope);

    if paths.is_empty() {
        tracing::info!("no changed source files; skipping checker");
    } else {
        let argv = config.checker_argv()?;
        let exit = run_checker(cwd, &argv, &config.checker_flags, &paths, |line| {
            accumulator.push_line(line)
        })?;
        tracing::debug!(code = ?exit.code, lines = exit.lines, "checker exited");
    }

    if accumulator.unparsed_count() > 0 || accumulator.out_of_scope_count() > 0 {
        tracing::info!(
            unparsed = accumulator.unparsed_count(),
            out_of_scope = accumulator.out_of_scope_count(),
            "dropped checker lines"
        );
    }

    let annotations = accumulator.finish();
    let verdict = aggregate(&annotations, max_errors);
    tracing::info!(
        conclusion = %verdict.conclusion,
        annotations = verdict.total_annotation_count,
        failures = verdict.failure_count,
        max_errors,
        "verdict"
    );

    Ok(CheckOutcome {
        verdict,
        annotations,
    })
}
