//! Core diagnostic type.

/// One finding emitted by the type-checker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// File path exactly as the checker printed it.
    pub file: String,
    /// Line number (1-based).
    pub line: usize,
    /// Column number (1-based).
    pub column: usize,
    /// Raw severity word (`error`, `note`, `info`, ...).
    pub severity_token: String,
    /// Message text; may contain colons.
    pub message: String,
    /// Error code from the trailing `[code]` suffix.
    pub error_code: String,
}
