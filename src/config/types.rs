//! Configuration constants and defaults for mypy-annotate.

/// The maximum number of annotations the check-run API accepts per request.
pub const MAX_BATCH_SIZE: usize = 50;

/// Flags that make the checker print one parseable line per diagnostic.
pub fn default_checker_flags() -> Vec<String> {
    vec![
        "--show-column-numbers".to_string(),
        "--show-error-codes".to_string(),
        "--hide-error-context".to_string(),
        "--no-error-summary".to_string(),
    ]
}

// Default value functions for serde
pub(crate) fn default_check_name() -> String {
    "Mypy".to_string()
}
pub(crate) fn default_checker_command() -> String {
    "mypy".to_string()
}
pub(crate) fn default_source_extension() -> String {
    "py".to_string()
}
pub(crate) fn default_batch_size() -> usize {
    MAX_BATCH_SIZE
}
pub(crate) fn default_api_url() -> String {
    "https://api.github.com".to_string()
}
