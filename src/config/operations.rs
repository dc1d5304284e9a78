//! Config loading, validation, and utility operations.

use super::model::Config;
use super::types::MAX_BATCH_SIZE;
use crate::error::{AnnotateError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(AnnotateError::UserError)` - Read error, parse error or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            AnnotateError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Load config from `path` if given, otherwise validated defaults.
    pub fn load_or_default<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Parse config from a YAML string.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| AnnotateError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate config values and return error on invalid values.
    ///
    /// Validation rules:
    /// - `check_name` and `checker_command` must be non-empty
    /// - `source_extension` must be non-empty and have no leading dot
    /// - `batch_size` must be between 1 and 50
    pub fn validate(&self) -> Result<()> {
        if self.check_name.trim().is_empty() {
            return Err(AnnotateError::UserError(
                "config validation failed: check_name must be non-empty".to_string(),
            ));
        }

        if self.checker_command.trim().is_empty() {
            return Err(AnnotateError::UserError(
                "config validation failed: checker_command must be non-empty".to_string(),
            ));
        }

        if self.source_extension.is_empty() {
            return Err(AnnotateError::UserError(
                "config validation failed: source_extension must be non-empty".to_string(),
            ));
        }
        if self.source_extension.starts_with('.') {
            return Err(AnnotateError::UserError(format!(
                "config validation failed: source_extension must not have a leading dot (found '{}'). Use '{}' instead.",
                self.source_extension,
                self.source_extension.trim_start_matches('.')
            )));
        }

        if self.batch_size == 0 || self.batch_size > MAX_BATCH_SIZE {
            return Err(AnnotateError::UserError(format!(
                "config validation failed: batch_size must be between 1 and {} (found {})",
                MAX_BATCH_SIZE, self.batch_size
            )));
        }

        Ok(())
    }

    /// Lowercase label used in summary and failure messages ("mypy").
    pub fn label(&self) -> String {
        self.check_name.to_lowercase()
    }

    /// Split `checker_command` into program + arguments.
    pub fn checker_argv(&self) -> Result<Vec<String>> {
        let argv = shell_words::split(&self.checker_command).map_err(|e| {
            AnnotateError::UserError(format!(
                "failed to parse checker_command: {}\nCommand: {}\nFix: check for unmatched quotes or invalid escape sequences.",
                e, self.checker_command
            ))
        })?;

        if argv.is_empty() {
            return Err(AnnotateError::UserError(format!(
                "checker_command is empty after parsing.\nCommand: {}",
                self.checker_command
            )));
        }

        Ok(argv)
    }
}
