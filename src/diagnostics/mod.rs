//! Diagnostic line parsing for mypy-annotate.
//!
//! The checker is run with `--show-column-numbers --show-error-codes
//! --hide-error-context --no-error-summary`, so every finding arrives as one
//! line of the form:
//!
//! ```text
//! <file>:<line>:<column>: <severity>: <message> [<error-code>]
//! ```
//!
//! Lines that do not match (notes without a code, crash output, blank lines)
//! are reported as no-match and dropped by the caller.

mod parser;
mod reader;
mod types;

#[cfg(test)]
mod tests;

// Re-export public API
pub use parser::parse_line;
pub use reader::read_lines_lossy;
pub use types::Diagnostic;
