//! Annotation pipeline for mypy-annotate.
//!
//! Turns parsed diagnostics into check-run annotations and a pass/fail verdict:
//! - Scope filtering: drop diagnostics for files outside the changed set
//! - Severity classification: `info` is a notice, everything else a failure
//! - Accumulation: fold checker lines into an ordered annotation list
//! - Aggregation: count failures against `--max-errors`

mod accumulator;
mod scope;
mod severity;
mod types;
mod verdict;


// Re-export public API
pub use accumulator::AnnotationAccumulator;
pub use scope::ScopeSet;
pub use types::Annotation;
pub use verdict::{Conclusion, RunVerdict, aggregate};
