//! Implementation of the `mypy-annotate parse` command.
//!
//! Runs captured checker output through the same annotation pipeline as
//! `run` and prints the result as JSON instead of publishing it. Useful for
//! previewing what a CI run would report.

use crate::annotate::{Annotation, AnnotationAccumulator, RunVerdict, ScopeSet, aggregate};
use crate::cli::ParseArgs;
use crate::config::Config;
use crate::diagnostics::read_lines_lossy;
use crate::error::{AnnotateError, Result};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use super::check_threshold;

/// JSON document printed by `parse`.
#[derive(Debug, Serialize)]
pub(crate) struct ParseReport {
    pub verdict: RunVerdict,
    pub unparsed_lines: usize,
    pub annotations: Vec<Annotation>,
}

/// Execute the `mypy-annotate parse` command.
pub fn cmd_parse(args: ParseArgs) -> Result<()> {
    let config = Config::load_or_default(args.config.as_ref())?;

    let scope = if args.only.is_empty() {
        None
    } else {
        Some(ScopeSet::new(args.only.iter().cloned()))
    };

    let report = match &args.input {
        Some(path) => {
            let file = File::open(path).map_err(|e| {
                AnnotateError::UserError(format!(
                    "failed to open input '{}': {}",
                    path.display(),
                    e
                ))
            })?;
            parse_report(BufReader::new(file), scope, args.max_errors)?
        }
        None => parse_report(io::stdin().lock(), scope, args.max_errors)?,
    };

    let json = serde_json::to_string_pretty(&report)
        .map_err(|e| AnnotateError::UserError(format!("failed to serialize report: {}", e)))?;
    println!("{}", json);

    check_threshold(&report.verdict, &config.label())
}

/// Fold every line of `reader` into annotations and a verdict.
pub(crate) fn parse_report<R: BufRead>(
    reader: R,
    scope: Option<ScopeSet>,
    max_errors: usize,
) -> Result<ParseReport> {
    let mut lines = Vec::new();
    read_lines_lossy(reader, |line| lines.push(line.to_string()))
        .map_err(|e| AnnotateError::UserError(format!("failed to read input: {}", e)))?;

    let accumulator = AnnotationAccumulator::from_lines(scope, &lines);

    let unparsed_lines = accumulator.unparsed_count();
    let annotations = accumulator.finish();
    let verdict = aggregate(&annotations, max_errors);

    Ok(ParseReport {
        verdict,
        unparsed_lines,
        annotations,
    })
}
