//! Grammar-driven parser for a single checker output line.

use regex::Regex;
use std::sync::LazyLock;

use super::types::Diagnostic;

/// `<file>:<line>:<column>: <severity>: <message> [<error-code>]`
///
/// The bracketed code suffix is mandatory. Character classes are spelled out
/// so that only ASCII digits and word characters match.
static DIAGNOSTIC_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<file>[^:]+)",
        r":(?P<line>[0-9]+)",
        r":(?P<column>[0-9]+)",
        r": (?P<severity>[A-Za-z0-9_]+)",
        r": (?P<message>.*)",
        r"\s+\[(?P<code>[a-z-]+)\]$",
    ))
    .expect("Invalid diagnostic line regex")
});

/// Parse one line of checker output.
///
/// # Returns
///
/// * `Some(Diagnostic)` - The line matched the grammar
/// * `None` - The line did not match, or a line/column was zero or overflowed
pub fn parse_line(line: &str) -> Option<Diagnostic> {
    let caps = DIAGNOSTIC_LINE.captures(line)?;

    let line_number = parse_position(&caps["line"])?;
    let column = parse_position(&caps["column"])?;

    Some(Diagnostic {
        file: caps["file"].to_string(),
        line: line_number,
        column,
        severity_token: caps["severity"].to_string(),
        message: caps["message"].to_string(),
        error_code: caps["code"].to_string(),
    })
}

/// Positions are 1-based; zero is not a valid position.
fn parse_position(digits: &str) -> Option<usize> {
    match digits.parse::<usize>() {
        Ok(0) | Err(_) => None,
        Ok(n) => Some(n),
    }
}
